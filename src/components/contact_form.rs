//! Contact Section Component
//!
//! Mock contact form: submission is simulated, nothing is sent.

use dioxus::prelude::*;
use folio_core::contact::{self, ContactForm};

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = form.write().submit();

        spawn(async move {
            contact::deliver(fields).await;
            form.write().complete();
        });
    };

    let state = form.read().clone();

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Say hello" }

            form {
                id: "contact-form",
                class: "contact-form",
                onsubmit: on_submit,

                label { r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{state.fields.name}",
                    oninput: move |e| form.write().fields.name = e.value(),
                }

                label { r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{state.fields.email}",
                    oninput: move |e| form.write().fields.email = e.value(),
                }

                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "5",
                    required: true,
                    value: "{state.fields.message}",
                    oninput: move |e| form.write().fields.message = e.value(),
                }

                button { class: "btn btn-primary", r#type: "submit", "Send" }
                p { id: "form-status", class: "form-status", role: "status", "{state.status.text()}" }
            }
        }
    }
}

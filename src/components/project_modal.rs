//! Project Preview Modal Component
//!
//! Always rendered so the animation library can fade it; visibility is
//! driven by `aria-hidden` (baseline CSS) and by the animator when present.

use dioxus::prelude::*;
use folio_core::animation::{self, MODAL};
use folio_core::ModalClick;

use crate::context::{use_animator, use_page_state};

#[component]
pub fn ProjectModal() -> Element {
    let mut page = use_page_state();
    let animator = use_animator();

    let modal = page.read().modal.clone();

    let mut close = move |target: Option<ModalClick>| {
        let closed = match target {
            Some(click) => page.write().click_modal(click),
            None => {
                page.write().close_preview();
                true
            }
        };
        if closed {
            animator.read().to(MODAL, &animation::modal_hide());
        }
    };

    rsx! {
        div {
            id: "project-modal",
            class: "modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modal-title",
            "aria-hidden": modal.aria_hidden(),
            onclick: move |_| close(Some(ModalClick::Backdrop)),

            div {
                class: "modal-dialog",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close preview",
                    onclick: move |e| {
                        e.stop_propagation();
                        close(None);
                    },
                    "✕"
                }

                h3 { id: "modal-title", "{modal.preview.title}" }
                div {
                    id: "modal-content",
                    dangerous_inner_html: "{modal.preview.body}",
                }
            }
        }
    }
}

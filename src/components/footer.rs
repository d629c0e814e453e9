use dioxus::prelude::*;
use folio_core::page::current_year;

/// Page footer with the current year.
#[component]
pub fn Footer() -> Element {
    let year = use_hook(current_year);

    rsx! {
        footer { class: "footer",
            p { "© " span { id: "year", "{year}" } " folio. Built with Rust." }
        }
    }
}

//! Mobile Menu Component
//!
//! Drop-down panel with the section links for narrow screens.

use dioxus::prelude::*;

use crate::components::nav_header::NavLocation;
use crate::context::use_page_state;

/// Mobile menu panel
///
/// Carries the `hidden` attribute while closed. Following a link closes it.
#[component]
pub fn MobileMenu() -> Element {
    let mut page = use_page_state();
    let hidden = page.read().menu.is_hidden();

    rsx! {
        nav {
            id: "mobile-menu",
            class: "mobile-menu",
            hidden,

            for location in NavLocation::ALL {
                a {
                    key: "{location.display_name()}",
                    class: "mobile-menu-item",
                    href: location.href(),
                    onclick: move |_| page.write().close_menu(),
                    "{location.display_name()}"
                }
            }
        }
    }
}

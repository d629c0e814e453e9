//! Navigation Header Component
//!
//! Brand, in-page section links, theme toggle and mobile menu toggle.

use dioxus::prelude::*;

use crate::context::{use_page_state, use_preferences};

/// In-page section the navigation links to
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Work,
    Projects,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [NavLocation::Work, NavLocation::Projects, NavLocation::Contact];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Work => "Work",
            NavLocation::Projects => "Projects",
            NavLocation::Contact => "Contact",
        }
    }

    /// Fragment link to the section
    pub fn href(&self) -> &'static str {
        match self {
            NavLocation::Work => "#hero",
            NavLocation::Projects => "#projects",
            NavLocation::Contact => "#contact",
        }
    }
}

/// Navigation Header component
///
/// - Left: brand
/// - Center: section links (hidden on narrow screens)
/// - Right: theme toggle and menu toggle
#[component]
pub fn NavHeader() -> Element {
    let mut page = use_page_state();
    let store = use_preferences();

    let theme = page.read().theme;
    let menu = page.read().menu;

    rsx! {
        header { class: "nav-header",
            a { class: "brand", href: "#hero", "folio" }

            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    a {
                        key: "{location.display_name()}",
                        class: "nav-link",
                        href: location.href(),
                        "{location.display_name()}"
                    }
                }
            }

            div { class: "nav-actions",
                button {
                    id: "theme-toggle",
                    class: "icon-btn",
                    "aria-label": "Toggle color theme",
                    onclick: move |_| {
                        page.write().toggle_theme(&store);
                    },
                    "{theme.glyph()}"
                }

                button {
                    id: "menu-toggle",
                    class: "icon-btn",
                    "aria-label": "Toggle menu",
                    "aria-expanded": if menu.is_open() { "true" } else { "false" },
                    onclick: move |_| {
                        let state = page.write().toggle_menu();
                        tracing::debug!(open = state.is_open(), "Mobile menu toggled");
                    },
                    "{menu.glyph()}"
                }
            }
        }
    }
}

//! Project Grid Component
//!
//! Filter row plus the projects grid. Cards animate on hover and open the
//! preview modal from their "View" button.

use dioxus::prelude::*;
use folio_core::animation::{self, MODAL};
use folio_core::catalog::{self, ProjectCard};

use crate::context::{use_animator, use_page_state, use_previews};

#[component]
pub fn ProjectGrid() -> Element {
    let mut page = use_page_state();
    let controls = use_hook(catalog::filters);
    let cards = use_hook(catalog::projects);

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Selected work" }

            div { class: "filters", role: "toolbar",
                for (index, control) in controls.iter().enumerate() {
                    button {
                        key: "{control.tag.token()}",
                        class: if page.read().filters.is_active(index) { "filter active" } else { "filter" },
                        "data-filter": control.tag.token(),
                        onclick: move |_| {
                            page.write().select_filter(index);
                        },
                        "{control.label}"
                    }
                }
            }

            div { id: "projects-grid", class: "grid",
                for card in cards.iter() {
                    ProjectCardView {
                        key: "{card.slug}",
                        card: card.clone(),
                        visible: page.read().is_card_visible(&card.tags),
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCardView(card: ProjectCard, visible: bool) -> Element {
    let mut page = use_page_state();
    let animator = use_animator();
    let previews = use_previews();

    let id = card.element_id();
    let selector = format!("#{}", id);
    let hover_selector = selector.clone();
    let slug = card.slug;

    rsx! {
        article {
            id: "{id}",
            class: "card",
            "data-tags": card.tags.to_attr(),
            style: if visible { "" } else { "display: none" },
            onmouseenter: move |_| animator.read().to(&hover_selector, &animation::hover_in()),
            onmouseleave: move |_| animator.read().to(&selector, &animation::hover_out()),

            h3 { class: "card-title", "{card.title}" }
            p { class: "card-summary", "{card.summary}" }
            ul { class: "card-tags",
                for tag in card.tags.iter() {
                    li { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            button {
                class: "view-btn",
                "data-slug": slug,
                onclick: move |_| {
                    page.write().open_preview(&previews, slug);
                    animator.read().to(MODAL, &animation::modal_show());
                },
                "View"
            }
        }
    }
}

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::animation::play_entrance;
use folio_core::{MemoryPreferences, PageState, Preferences, PreviewRegistry};

use crate::animation::{detect, GSAP_SRC};
use crate::components::{ContactSection, Footer, Hero, MobileMenu, NavHeader, ProjectGrid, ProjectModal};
use crate::context::{SharedAnimator, SharedPreferences};
use crate::get_data_dir;
use crate::theme::GLOBAL_STYLES;

/// Open the preference database, falling back to memory so the page still
/// works (without persistence) when the data directory is unusable.
fn open_preferences() -> SharedPreferences {
    let data_dir = get_data_dir();
    match Preferences::in_dir(&data_dir) {
        Ok(prefs) => Arc::new(prefs),
        Err(e) => {
            tracing::warn!("Failed to open preferences in {:?}: {}", data_dir, e);
            Arc::new(MemoryPreferences::new())
        }
    }
}

/// Root application component.
///
/// Provides global styles, page state and collaborators, then lays out the
/// page sections.
#[component]
pub fn App() -> Element {
    let store = use_hook(open_preferences);
    let page: Signal<PageState> = use_signal({
        let store = store.clone();
        move || PageState::load(&store)
    });
    let mut animator: Signal<SharedAnimator> = use_signal(SharedAnimator::default);

    use_context_provider(|| store.clone());
    use_context_provider(|| page);
    use_context_provider(|| Rc::new(PreviewRegistry::builtin()));
    use_context_provider(|| animator);

    // Select the animation collaborator and play the entrance once
    use_effect(move || {
        spawn(async move {
            let selected = detect(crate::animations_disabled()).await;
            play_entrance(&*selected);
            animator.set(selected);
        });
    });

    let theme = page.read().theme;

    rsx! {
        document::Script { src: GSAP_SRC }
        style { {GLOBAL_STYLES} }
        div {
            class: "page",
            "data-theme": theme.data_attribute(),

            NavHeader {}
            MobileMenu {}
            main {
                Hero {}
                ProjectGrid {}
                ContactSection {}
            }
            Footer {}
            ProjectModal {}
        }
    }
}

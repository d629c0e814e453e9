//! Page context providers for Folio.
//!
//! The root [`App`](crate::app::App) provides the page state, the
//! preference store, the preview registry and the animation collaborator;
//! sections read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = use_page_state();
//! let store = use_preferences();
//! page.write().toggle_theme(&store);
//! ```

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Animator, NoopAnimator, PageState, PreferenceStore, PreviewRegistry};

/// Preference store shared by the page.
pub type SharedPreferences = Arc<dyn PreferenceStore + Send + Sync>;

/// Animation collaborator selected at startup.
#[derive(Clone)]
pub struct SharedAnimator(pub Rc<dyn Animator>);

impl Default for SharedAnimator {
    fn default() -> Self {
        Self(Rc::new(NoopAnimator))
    }
}

impl std::ops::Deref for SharedAnimator {
    type Target = dyn Animator;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Hook to access the page state.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to access the preference store.
pub fn use_preferences() -> SharedPreferences {
    use_context::<SharedPreferences>()
}

/// Hook to access the preview registry.
pub fn use_previews() -> Rc<PreviewRegistry> {
    use_context::<Rc<PreviewRegistry>>()
}

/// Hook to access the animation collaborator.
///
/// Holds the no-op animator until library detection finishes.
pub fn use_animator() -> Signal<SharedAnimator> {
    use_context::<Signal<SharedAnimator>>()
}

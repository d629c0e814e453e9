//! Folio Core Library
//!
//! Page state and behavior for the portfolio site, independent of any UI toolkit.
//!
//! ## Overview
//!
//! Every interactive piece of the page is modelled here as typed state with
//! pure transitions. The UI layer renders that state and forwards events:
//!
//! - **Theme**: dark/light switch persisted in a preference store
//! - **Menu**: mobile navigation panel, open or closed
//! - **Typewriter**: cancellable loop revealing rotating phrases
//! - **Tilt**: pointer-driven 3D rotation of the hero device card
//! - **Filter**: tag-based project filtering with one active control
//! - **Preview**: project preview registry shown in a modal
//! - **Animation**: optional external animation collaborator
//! - **Contact**: mock contact form submission
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{PageState, Preferences, PreviewRegistry};
//!
//! let store = Preferences::new("~/.local/share/folio/preferences.redb")?;
//! let mut page = PageState::load(&store);
//!
//! page.toggle_theme(&store);
//! page.select_filter(2);
//! page.open_preview(&PreviewRegistry::builtin(), "uilib");
//! assert_eq!(page.modal.preview.title, "UI Library");
//! ```

pub mod animation;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod logging;
pub mod menu;
pub mod modal;
pub mod page;
pub mod preview;
pub mod storage;
pub mod theme;
pub mod tilt;
pub mod typewriter;

// Re-exports
pub use animation::{Animator, Ease, NoopAnimator, Tween};
pub use catalog::{FilterControl, ProjectCard};
pub use contact::{ContactFields, ContactForm, FormStatus};
pub use error::{FolioError, FolioResult};
pub use filter::{FilterBar, FilterTag, TagSet};
pub use menu::MenuState;
pub use modal::{ModalClick, ModalState};
pub use page::PageState;
pub use preview::{Preview, PreviewRegistry};
pub use storage::{MemoryPreferences, PreferenceStore, Preferences};
pub use theme::Theme;
pub use tilt::{Rect, Tilt, TiltTracker};
pub use typewriter::{Frame, Typewriter, TypewriterHandle};

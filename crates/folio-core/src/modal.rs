//! Project preview modal state.

use crate::preview::{Preview, PreviewRegistry};

/// Where a click on the modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// Directly on the backdrop, outside the content area
    Backdrop,
    /// Inside the content area
    Content,
}

/// Preview modal: visibility plus the content last shown
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub preview: Preview,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            preview: Preview::fallback(),
        }
    }
}

impl ModalState {
    /// Populate from the registry (falling back for unknown slugs) and show.
    pub fn open_with(&mut self, registry: &PreviewRegistry, slug: &str) {
        self.preview = registry.lookup(slug);
        self.open = true;
        tracing::debug!(slug, title = %self.preview.title, "Preview opened");
    }

    /// Hide the modal. Content is kept so a fade-out still shows it.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Preview closed");
        }
        self.open = false;
    }

    /// Handle a click on the modal; returns whether it closed.
    pub fn click(&mut self, target: ModalClick) -> bool {
        match target {
            ModalClick::Backdrop if self.open => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Value of the `aria-hidden` attribute, removed while open.
    pub fn aria_hidden(&self) -> Option<&'static str> {
        if self.open {
            None
        } else {
            Some("true")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let modal = ModalState::default();
        assert!(!modal.open);
        assert_eq!(modal.aria_hidden(), Some("true"));
    }

    #[test]
    fn test_open_known_slug() {
        let mut modal = ModalState::default();
        modal.open_with(&PreviewRegistry::builtin(), "uilib");
        assert!(modal.open);
        assert_eq!(modal.aria_hidden(), None);
        assert_eq!(modal.preview.title, "UI Library");
    }

    #[test]
    fn test_open_unknown_slug_shows_fallback() {
        let mut modal = ModalState::default();
        modal.open_with(&PreviewRegistry::builtin(), "xyz");
        assert!(modal.open);
        assert_eq!(modal.preview, Preview::fallback());
    }

    #[test]
    fn test_content_click_keeps_open() {
        let mut modal = ModalState::default();
        modal.open_with(&PreviewRegistry::builtin(), "blog");
        assert!(!modal.click(ModalClick::Content));
        assert!(modal.open);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = ModalState::default();
        modal.open_with(&PreviewRegistry::builtin(), "blog");
        assert!(modal.click(ModalClick::Backdrop));
        assert!(!modal.open);
        assert_eq!(modal.aria_hidden(), Some("true"));
        assert_eq!(modal.preview.title, "Personal Blog");
    }
}

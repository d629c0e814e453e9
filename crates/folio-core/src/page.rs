//! Page-wide UI state.
//!
//! Everything the page toggles lives in one typed value with pure
//! transitions. The UI reads it to render and calls the transitions from
//! its event handlers; nothing is read back from rendered attributes.

use chrono::Datelike;

use crate::catalog;
use crate::filter::{FilterBar, TagSet};
use crate::menu::MenuState;
use crate::modal::{ModalClick, ModalState};
use crate::preview::PreviewRegistry;
use crate::storage::PreferenceStore;
use crate::theme::Theme;

/// Interactive state of the portfolio page
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub menu: MenuState,
    pub filters: FilterBar,
    pub modal: ModalState,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            menu: MenuState::default(),
            filters: catalog::filter_bar(),
            modal: ModalState::default(),
        }
    }
}

impl PageState {
    /// Initial state with the persisted theme.
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            theme: Theme::load(store),
            ..Self::default()
        }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&mut self, store: &impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.persist(store);
        tracing::info!(theme = %self.theme, "Theme changed");
        self.theme
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn select_filter(&mut self, index: usize) -> bool {
        self.filters.select(index)
    }

    pub fn is_card_visible(&self, tags: &TagSet) -> bool {
        self.filters.is_visible(tags)
    }

    pub fn open_preview(&mut self, registry: &PreviewRegistry, slug: &str) {
        self.modal.open_with(registry, slug);
    }

    pub fn close_preview(&mut self) {
        self.modal.close();
    }

    /// Returns whether the click closed the modal.
    pub fn click_modal(&mut self, target: ModalClick) -> bool {
        self.modal.click(target)
    }
}

/// Calendar year shown in the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;
    use crate::theme::THEME_KEY;

    #[test]
    fn test_load_uses_stored_theme() {
        let store = MemoryPreferences::new();
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(PageState::load(&store).theme, Theme::Light);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = MemoryPreferences::new();
        let mut page = PageState::load(&store);

        assert_eq!(page.toggle_theme(&store), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(page.toggle_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_filter_hides_non_matching_cards() {
        let mut page = PageState::default();
        let design = page
            .filters
            .controls()
            .iter()
            .position(|t| t.token() == "design")
            .unwrap();
        page.select_filter(design);

        let visible: Vec<&str> = catalog::projects()
            .iter()
            .filter(|c| page.is_card_visible(&c.tags))
            .map(|c| c.slug)
            .collect();
        assert_eq!(visible, vec!["portfolio", "design"]);
    }

    #[test]
    fn test_preview_open_close() {
        let mut page = PageState::default();
        page.open_preview(&PreviewRegistry::builtin(), "contrib");
        assert!(page.modal.open);
        page.close_preview();
        assert!(!page.modal.open);
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}

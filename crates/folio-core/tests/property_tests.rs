//! Property-based tests for page state
//!
//! Uses proptest to verify the invariants of theme toggling, filtering,
//! the typewriter cycle, and the tilt computation.

use folio_core::catalog;
use folio_core::filter::{FilterBar, FilterTag, TagSet};
use folio_core::theme::THEME_KEY;
use folio_core::tilt::{Rect, Tilt, TILT_SCALE_DEG};
use folio_core::{MemoryPreferences, PageState, PreferenceStore, Theme, Typewriter};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short lowercase tags, like the ones rendered into `data-tags`
fn tag_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").expect("valid regex")
}

fn tag_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag_strategy(), 0..5)
}

/// Non-empty phrases without control characters
fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z0-9 é]{0,12}").expect("valid regex"),
        1..5,
    )
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500.0..500.0f64, -500.0..500.0f64, 1.0..800.0f64, 1.0..800.0f64)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After N toggles from dark the theme is light iff N is odd, and the
    /// stored value always matches the current theme
    #[test]
    fn theme_parity_and_persistence(n in 0usize..40) {
        let store = MemoryPreferences::new();
        let mut page = PageState::load(&store);

        for _ in 0..n {
            let theme = page.toggle_theme(&store);
            let stored = store.get(THEME_KEY).unwrap();
            prop_assert_eq!(stored.as_deref(), Some(theme.as_str()));
        }

        prop_assert_eq!(page.theme == Theme::Light, n % 2 == 1);
    }

    /// Exactly one control is active after any sequence of selections
    #[test]
    fn filter_selection_is_exclusive(selections in prop::collection::vec(0usize..8, 0..20)) {
        let mut bar = catalog::filter_bar();
        for index in selections {
            bar.select(index);
            let active = (0..bar.controls().len()).filter(|&i| bar.is_active(i)).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// A card is visible iff the filter is the wildcard or its tag is a member
    #[test]
    fn filter_visibility_is_membership(
        filter in prop_oneof![Just("*".to_string()), tag_strategy()],
        tags in tag_set_strategy(),
    ) {
        let mut bar = FilterBar::new(vec![FilterTag::All, FilterTag::parse(&filter)]);
        bar.select(1);

        let card = TagSet::parse(&tags.join(" "));
        let expected = filter == "*" || tags.contains(&filter);
        prop_assert_eq!(bar.is_visible(&card), expected);
    }

    /// Within a phrase the reveal count never decreases; after a complete
    /// phrase the next one is (i + 1) mod len, starting from zero characters
    #[test]
    fn typewriter_cycles_in_order(phrases in phrases_strategy(), ticks in 1usize..200) {
        let mut tw = Typewriter::new(phrases.clone());

        for _ in 0..ticks {
            let index = tw.phrase_index();
            let count = tw.char_count();
            let frame = tw.tick();

            prop_assert_eq!(frame.text.chars().count(), count);
            prop_assert!(phrases[index].starts_with(&frame.text));

            if tw.phrase_index() == index && tw.char_count() != 0 {
                prop_assert_eq!(tw.char_count(), count + 1);
            } else {
                prop_assert_eq!(frame.text.as_str(), phrases[index].as_str());
                prop_assert_eq!(tw.phrase_index(), (index + 1) % phrases.len());
                prop_assert_eq!(tw.char_count(), 0);
            }
        }
    }

    /// Any pointer inside the card tilts by at most half the scale per axis
    #[test]
    fn tilt_is_bounded_inside_card(rect in rect_strategy(), fx in 0.0..=1.0f64, fy in 0.0..=1.0f64) {
        let x = rect.left + fx * rect.width;
        let y = rect.top + fy * rect.height;
        let tilt = Tilt::at(rect, x, y);

        let bound = TILT_SCALE_DEG / 2.0 + 1e-9;
        prop_assert!(tilt.rx.abs() <= bound);
        prop_assert!(tilt.ry.abs() <= bound);
    }

    /// The center of any card produces no added tilt
    #[test]
    fn tilt_is_zero_at_center(rect in rect_strategy()) {
        let (cx, cy) = rect.center();
        let tilt = Tilt::at(rect, cx, cy);
        prop_assert!(tilt.rx.abs() < 1e-9);
        prop_assert!(tilt.ry.abs() < 1e-9);
    }
}

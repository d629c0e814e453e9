//! Tag-based project filtering.
//!
//! Exactly one filter control is active at a time. A card is visible iff
//! the active control is the wildcard or its tag is in the card's tag set.

use std::collections::BTreeSet;

/// Token a filter control uses to mean "show everything".
pub const WILDCARD: &str = "*";

static ALL: FilterTag = FilterTag::All;

/// Tag selected by a filter control
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterTag {
    All,
    Tag(String),
}

impl FilterTag {
    /// Parse a control's `data-filter` token.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            WILDCARD => FilterTag::All,
            tag => FilterTag::Tag(tag.to_string()),
        }
    }

    /// Token rendered back into the control's `data-filter` attribute.
    pub fn token(&self) -> &str {
        match self {
            FilterTag::All => WILDCARD,
            FilterTag::Tag(tag) => tag.as_str(),
        }
    }

    pub fn matches(&self, tags: &TagSet) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Tag(tag) => tags.contains(tag),
        }
    }
}

/// The tags a project card carries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Parse a space-separated `data-tags` value.
    pub fn parse(tags: &str) -> Self {
        Self(tags.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated form, as rendered into `data-tags`.
    pub fn to_attr(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

/// A row of mutually exclusive filter controls
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    controls: Vec<FilterTag>,
    active: usize,
}

impl FilterBar {
    /// Create a bar with the first control active.
    pub fn new(controls: Vec<FilterTag>) -> Self {
        Self {
            controls,
            active: 0,
        }
    }

    pub fn controls(&self) -> &[FilterTag] {
        &self.controls
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Activate the control at `index`, deactivating all others.
    ///
    /// Returns `false` and leaves the selection unchanged when `index` is
    /// out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.controls.len() {
            tracing::debug!(index, "Ignoring selection of unknown filter control");
            return false;
        }
        self.active = index;
        tracing::debug!(filter = self.controls[index].token(), "Filter selected");
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active && index < self.controls.len()
    }

    /// Tag of the active control; an empty bar behaves as the wildcard.
    pub fn active_tag(&self) -> &FilterTag {
        self.controls.get(self.active).unwrap_or(&ALL)
    }

    pub fn is_visible(&self, tags: &TagSet) -> bool {
        self.active_tag().matches(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> FilterBar {
        FilterBar::new(vec![
            FilterTag::parse("*"),
            FilterTag::parse("web"),
            FilterTag::parse("design"),
        ])
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(FilterTag::parse("*"), FilterTag::All);
        assert_eq!(FilterTag::parse("web"), FilterTag::Tag("web".to_string()));
        assert_eq!(FilterTag::All.token(), "*");
    }

    #[test]
    fn test_tag_set_splits_on_whitespace() {
        let tags = TagSet::parse("web  design oss");
        assert!(tags.contains("web"));
        assert!(tags.contains("design"));
        assert!(tags.contains("oss"));
        assert!(!tags.contains(""));
        assert_eq!(tags.to_attr(), "design oss web");
    }

    #[test]
    fn test_initially_wildcard_shows_everything() {
        let bar = bar();
        assert!(bar.is_active(0));
        assert!(bar.is_visible(&TagSet::parse("")));
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut bar = bar();
        assert!(bar.select(2));
        assert!(!bar.is_active(0));
        assert!(!bar.is_active(1));
        assert!(bar.is_active(2));
    }

    #[test]
    fn test_visibility_follows_membership() {
        let mut bar = bar();
        bar.select(1);
        assert!(bar.is_visible(&TagSet::parse("web oss")));
        assert!(!bar.is_visible(&TagSet::parse("design")));
        // Substring of a tag is not membership
        assert!(!bar.is_visible(&TagSet::parse("webgl")));
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut bar = bar();
        bar.select(1);
        assert!(!bar.select(7));
        assert_eq!(bar.active_index(), 1);
    }
}

//! Project cards and filter controls shown on the page.

use crate::filter::{FilterBar, FilterTag, TagSet};

/// A card in the projects grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Preview registry key, also used to build the card's element id
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: TagSet,
}

impl ProjectCard {
    fn new(slug: &'static str, title: &'static str, summary: &'static str, tags: &str) -> Self {
        Self {
            slug,
            title,
            summary,
            tags: TagSet::parse(tags),
        }
    }

    /// Element id of the card, targeted by hover animations.
    pub fn element_id(&self) -> String {
        format!("card-{}", self.slug)
    }
}

/// A button in the filter row
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub label: &'static str,
    pub tag: FilterTag,
}

/// The projects grid, in display order.
pub fn projects() -> Vec<ProjectCard> {
    vec![
        ProjectCard::new(
            "portfolio",
            "Portfolio Site",
            "Responsive personal site with motion and a CMS-free workflow.",
            "web design",
        ),
        ProjectCard::new(
            "uilib",
            "UI Library",
            "Accessible component library for design systems.",
            "web oss",
        ),
        ProjectCard::new(
            "design",
            "Design Case Study",
            "Product design from research to tested prototype.",
            "design",
        ),
        ProjectCard::new(
            "blog",
            "Personal Blog",
            "Minimal markdown blog with custom themes.",
            "web",
        ),
        ProjectCard::new(
            "contrib",
            "Open Source Contributions",
            "Selected pull requests and issues upstream.",
            "oss",
        ),
    ]
}

/// The filter row, wildcard first.
pub fn filters() -> Vec<FilterControl> {
    [("All", "*"), ("Web", "web"), ("Design", "design"), ("Open Source", "oss")]
        .into_iter()
        .map(|(label, token)| FilterControl {
            label,
            tag: FilterTag::parse(token),
        })
        .collect()
}

/// A filter bar over [`filters`], with "All" active.
pub fn filter_bar() -> FilterBar {
    FilterBar::new(filters().into_iter().map(|c| c.tag).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewRegistry;

    #[test]
    fn test_every_card_has_a_preview() {
        let registry = PreviewRegistry::builtin();
        for card in projects() {
            assert!(registry.get(card.slug).is_some(), "missing preview: {}", card.slug);
        }
    }

    #[test]
    fn test_every_tag_filter_matches_a_card() {
        let cards = projects();
        for control in filters() {
            assert!(
                cards.iter().any(|c| control.tag.matches(&c.tags)),
                "filter '{}' matches nothing",
                control.label
            );
        }
    }

    #[test]
    fn test_element_id() {
        assert_eq!(projects()[1].element_id(), "card-uilib");
    }
}

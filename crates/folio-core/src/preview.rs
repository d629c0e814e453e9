//! Project preview registry.
//!
//! Maps a project slug to the title and markup shown in the preview modal.
//! Lookups never fail: an unknown slug resolves to [`Preview::fallback`].

use std::collections::HashMap;

/// Content shown in the preview modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    /// Trusted markup fragment, rendered as inner HTML
    pub body: String,
}

impl Preview {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Shown for slugs without a registered preview.
    pub fn fallback() -> Self {
        Self::new("Project", "<p>No preview available.</p>")
    }
}

/// Immutable slug → preview table
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    entries: HashMap<String, Preview>,
}

impl PreviewRegistry {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Preview)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The portfolio's five project previews.
    pub fn builtin() -> Self {
        let entries = [
            (
                "portfolio",
                "Portfolio Site",
                "img/portfolio-preview.jpg",
                "Portfolio preview",
                "Modern responsive site with animations and a CMS-free workflow. Built with HTML, CSS, JS.",
            ),
            (
                "uilib",
                "UI Library",
                "img/ui-library-preview.jpg",
                "UI Library preview",
                "Accessible component library for design systems. React + Storybook.",
            ),
            (
                "design",
                "Design Case Study",
                "img/design-preview.jpg",
                "Design preview",
                "End-to-end product design with prototypes and usability testing.",
            ),
            (
                "blog",
                "Personal Blog",
                "img/blog-preview.jpg",
                "Blog preview",
                "Minimal blog platform with markdown support and custom themes.",
            ),
            (
                "contrib",
                "Open Source Contributions",
                "img/contrib-preview.jpg",
                "OSS preview",
                "Highlighted PRs and issues in popular OSS projects.",
            ),
        ];

        Self::new(entries.into_iter().map(|(slug, title, img, alt, text)| {
            (slug.to_string(), Preview::new(title, preview_markup(img, alt, text)))
        }))
    }

    /// Registered preview for `slug`, if any.
    pub fn get(&self, slug: &str) -> Option<&Preview> {
        self.entries.get(slug)
    }

    /// Preview for `slug`, or the fallback.
    pub fn lookup(&self, slug: &str) -> Preview {
        match self.get(slug) {
            Some(preview) => preview.clone(),
            None => {
                tracing::debug!(slug, "No preview registered");
                Preview::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn preview_markup(img: &str, alt: &str, text: &str) -> String {
    format!(
        "<img src='{img}' alt='{alt}' style='width:100%;border-radius:8px;margin-bottom:12px'><p>{text}</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_five_entries() {
        assert_eq!(PreviewRegistry::builtin().len(), 5);
    }

    #[test]
    fn test_lookup_known_slug() {
        let preview = PreviewRegistry::builtin().lookup("uilib");
        assert_eq!(preview.title, "UI Library");
        assert!(preview.body.contains("React + Storybook"));
        assert!(preview.body.contains("img/ui-library-preview.jpg"));
    }

    #[test]
    fn test_lookup_unknown_slug_falls_back() {
        let preview = PreviewRegistry::builtin().lookup("xyz");
        assert_eq!(preview.title, "Project");
        assert_eq!(preview.body, "<p>No preview available.</p>");
    }

    #[test]
    fn test_empty_slug_falls_back() {
        assert_eq!(PreviewRegistry::builtin().lookup(""), Preview::fallback());
    }
}

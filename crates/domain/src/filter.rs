//! Portfolio categories and filter selections.
//!
//! Both are read once from markup data attributes when the filter is
//! installed, so click handling never touches raw attribute strings.

use std::fmt;

/// Reserved `data-filter` value that shows every item.
pub const ALL_SENTINEL: &str = "all";

/// Category label of a portfolio item.
///
/// A missing attribute is kept apart from an empty one: the default,
/// unlabelled category only equals another unlabelled category, never `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Category(Option<String>);

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(Some(label.into()))
    }

    /// Resolve from an optional attribute value.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self(raw.map(str::to_string))
    }

    /// The label, or `None` when the attribute was missing.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub fn is_unlabelled(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

/// What a filter control selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    /// Show every item.
    All,
    /// Show only items of this category.
    Only(Category),
}

impl FilterSelection {
    /// Resolve from an optional `data-filter` attribute value.
    ///
    /// A missing attribute selects the unlabelled category, which only
    /// matches items without a `data-category` attribute.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some(ALL_SENTINEL) => Self::All,
            other => Self::Only(Category::from_attribute(other)),
        }
    }

    /// Whether an item of `category` stays visible under this selection.
    #[must_use]
    pub fn includes(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SENTINEL),
            Self::Only(category) => category.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_sentinel() {
        assert_eq!(FilterSelection::from_attribute(Some("all")), FilterSelection::All);
    }

    #[test]
    fn should_parse_category_selection() {
        assert_eq!(
            FilterSelection::from_attribute(Some("web")),
            FilterSelection::Only(Category::new("web"))
        );
    }

    #[test]
    fn should_include_everything_when_all_selected() {
        let all = FilterSelection::All;
        assert!(all.includes(&Category::new("web")));
        assert!(all.includes(&Category::default()));
        assert!(all.includes(&Category::new("")));
    }

    #[test]
    fn should_include_only_matching_category() {
        let web = FilterSelection::from_attribute(Some("web"));
        assert!(web.includes(&Category::new("web")));
        assert!(!web.includes(&Category::new("print")));
    }

    #[test]
    fn should_be_case_sensitive() {
        let web = FilterSelection::from_attribute(Some("Web"));
        assert!(!web.includes(&Category::new("web")));
        assert_eq!(
            FilterSelection::from_attribute(Some("ALL")),
            FilterSelection::Only(Category::new("ALL"))
        );
    }

    #[test]
    fn should_match_uncategorized_items_when_filter_attribute_missing() {
        let missing = FilterSelection::from_attribute(None);
        assert!(missing.includes(&Category::from_attribute(None)));
        assert!(!missing.includes(&Category::new("web")));
    }

    #[test]
    fn should_keep_missing_category_apart_from_empty_one() {
        let unlabelled = Category::from_attribute(None);
        let empty = Category::from_attribute(Some(""));
        assert!(unlabelled.is_unlabelled());
        assert!(!empty.is_unlabelled());
        assert_ne!(unlabelled, empty);
        assert_eq!(unlabelled, Category::default());
    }

    #[test]
    fn should_not_match_missing_category_when_filter_is_empty() {
        let empty = FilterSelection::from_attribute(Some(""));
        assert!(empty.includes(&Category::from_attribute(Some(""))));
        assert!(!empty.includes(&Category::from_attribute(None)));

        let missing = FilterSelection::from_attribute(None);
        assert!(!missing.includes(&Category::from_attribute(Some(""))));
    }

    #[test]
    fn should_display_selection() {
        assert_eq!(FilterSelection::All.to_string(), "all");
        assert_eq!(FilterSelection::Only(Category::new("3d")).to_string(), "3d");
    }
}

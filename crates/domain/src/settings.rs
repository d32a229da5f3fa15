//! Settings: the markup/stylesheet contract the behaviors rely on.
//!
//! Every field defaults to the markup the page ships with, so a page only has
//! to override what it renames. All structs are `#[serde(default)]` and
//! partial documents merge with the defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

/// Top-level behavior settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Element ids looked up once at install time.
    pub ids: ElementIds,
    /// Class names selecting element collections.
    pub classes: ClassNames,
    /// Data attributes read from markup.
    pub attributes: DataAttributes,
    /// Class names toggled to drive stylesheet transitions.
    pub markers: Markers,
    /// Transition delays, paired with the stylesheet durations.
    pub timings: Timings,
    /// Viewport intersection options for the reveal animator.
    pub reveal: RevealOptions,
    /// Scroll offset above which the back-to-top button shows, in pixels.
    pub back_to_top_threshold: f64,
    /// Storage key holding the theme preference.
    pub storage_key: String,
}

/// Well-known element ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub mobile_menu: String,
    pub mobile_menu_open: String,
    pub mobile_menu_close: String,
    pub theme_toggle: String,
    pub back_to_top: String,
    pub lightbox: String,
    pub lightbox_image: String,
    pub lightbox_caption: String,
    pub lightbox_close: String,
}

/// Class names that select element collections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub mobile_link: String,
    pub reveal: String,
    pub filter_control: String,
    pub portfolio_item: String,
}

/// Data attribute names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataAttributes {
    pub filter: String,
    pub category: String,
    pub description: String,
}

/// Visual state markers shared with the stylesheet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Drawer on-screen position.
    pub drawer_open: String,
    /// Drawer off-screen position.
    pub drawer_closed: String,
    /// Root class enabling dark mode.
    pub dark: String,
    /// Classes present while the back-to-top button is hidden.
    pub back_to_top_hidden: Vec<String>,
    /// Class added once an element has been revealed.
    pub revealed: String,
    /// Class on the selected filter control.
    pub filter_active: String,
    /// Highlight classes stripped from every control on selection.
    pub filter_highlight: Vec<String>,
    /// Classes added to every control on selection.
    pub filter_idle: Vec<String>,
    /// Class on portfolio items excluded by the filter.
    pub item_hidden: String,
    /// Class keeping the lightbox out of the layout.
    pub lightbox_hidden: String,
    /// Class keeping the lightbox fully transparent.
    pub lightbox_transparent: String,
}

/// Transition delays in milliseconds.
///
/// These must match the CSS transition durations of the matching markers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Filter fade-out before visibility is decided.
    pub filter_fade_out_ms: u32,
    /// Delay between un-hiding an item and fading it back in.
    pub filter_fade_in_ms: u32,
    /// Delay between un-hiding the lightbox and starting its fade-in.
    pub lightbox_open_ms: u32,
    /// Lightbox fade-out before it is re-hidden.
    pub lightbox_close_ms: u32,
}

/// Intersection options for the reveal animator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport (`top right bottom left`).
    pub root_margin: String,
}

impl Settings {
    /// Check invariants on values the behaviors cannot work around.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatioOutOfRange`] when the reveal threshold
    /// is outside `[0, 1]`, [`ValidationError::NegativeOffset`] for a negative
    /// back-to-top threshold, and [`ValidationError::EmptyName`] when the
    /// storage key or a marker used for state classification is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ValidationError::RatioOutOfRange {
                field: "reveal.threshold",
                value: self.reveal.threshold,
            });
        }
        if self.back_to_top_threshold < 0.0 || self.back_to_top_threshold.is_nan() {
            return Err(ValidationError::NegativeOffset {
                field: "back_to_top_threshold",
                value: self.back_to_top_threshold,
            });
        }
        let required = [
            ("storage_key", &self.storage_key),
            ("markers.drawer_open", &self.markers.drawer_open),
            ("markers.dark", &self.markers.dark),
            ("markers.lightbox_hidden", &self.markers.lightbox_hidden),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::EmptyName { field });
            }
        }
        Ok(())
    }
}

impl Timings {
    #[must_use]
    pub fn filter_fade_out(&self) -> Duration {
        Duration::from_millis(self.filter_fade_out_ms.into())
    }

    #[must_use]
    pub fn filter_fade_in(&self) -> Duration {
        Duration::from_millis(self.filter_fade_in_ms.into())
    }

    #[must_use]
    pub fn lightbox_open(&self) -> Duration {
        Duration::from_millis(self.lightbox_open_ms.into())
    }

    #[must_use]
    pub fn lightbox_close(&self) -> Duration {
        Duration::from_millis(self.lightbox_close_ms.into())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            attributes: DataAttributes::default(),
            markers: Markers::default(),
            timings: Timings::default(),
            reveal: RevealOptions::default(),
            back_to_top_threshold: 500.0,
            storage_key: "theme".to_string(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            mobile_menu: "mobile-menu".to_string(),
            mobile_menu_open: "mobile-menu-btn".to_string(),
            mobile_menu_close: "close-menu-btn".to_string(),
            theme_toggle: "theme-toggle".to_string(),
            back_to_top: "back-to-top".to_string(),
            lightbox: "lightbox".to_string(),
            lightbox_image: "lightbox-img".to_string(),
            lightbox_caption: "lightbox-desc".to_string(),
            lightbox_close: "lightbox-close".to_string(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            mobile_link: "mobile-link".to_string(),
            reveal: "reveal".to_string(),
            filter_control: "filter-btn".to_string(),
            portfolio_item: "portfolio-item".to_string(),
        }
    }
}

impl Default for DataAttributes {
    fn default() -> Self {
        Self {
            filter: "data-filter".to_string(),
            category: "data-category".to_string(),
            description: "data-description".to_string(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            drawer_open: "translate-x-0".to_string(),
            drawer_closed: "translate-x-full".to_string(),
            dark: "dark".to_string(),
            back_to_top_hidden: vec!["translate-y-20".to_string(), "opacity-0".to_string()],
            revealed: "active".to_string(),
            filter_active: "active".to_string(),
            filter_highlight: vec![
                "bg-primary".to_string(),
                "text-white".to_string(),
                "border-primary".to_string(),
            ],
            filter_idle: vec!["border-gray-200".to_string()],
            item_hidden: "hidden".to_string(),
            lightbox_hidden: "hidden".to_string(),
            lightbox_transparent: "opacity-0".to_string(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            filter_fade_out_ms: 300,
            filter_fade_in_ms: 50,
            lightbox_open_ms: 10,
            lightbox_close_ms: 300,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

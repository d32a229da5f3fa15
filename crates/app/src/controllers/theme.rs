//! Light/dark theme with a persisted preference.

use std::rc::Rc;

use vitrine_domain::settings::Settings;
use vitrine_domain::theme::Theme;

use crate::ports::{EventKind, ListenTarget, Page, UiEvent};

/// Applies the theme marker on the document root and persists it.
///
/// Storage is best-effort: failures are logged and the marker is applied
/// anyway.
pub struct ThemeController<P: Page> {
    page: Rc<P>,
    root: Option<P::Element>,
    dark_marker: String,
    storage_key: String,
}

impl<P: Page> ThemeController<P> {
    /// Apply the initial theme, then bind the toggle control if present.
    pub fn install(page: &Rc<P>, settings: &Settings) -> Rc<Self> {
        let controller = Rc::new(Self {
            page: Rc::clone(page),
            root: page.root(),
            dark_marker: settings.markers.dark.clone(),
            storage_key: settings.storage_key.clone(),
        });
        controller.set_theme(controller.initial_theme());

        match page.element_by_id(&settings.ids.theme_toggle) {
            Some(toggle) => {
                let this = Rc::clone(&controller);
                page.listen(
                    ListenTarget::Element(toggle),
                    EventKind::Click,
                    Rc::new(move |_: &UiEvent| this.toggle()),
                );
            }
            None => tracing::debug!(id = %settings.ids.theme_toggle, "theme toggle not present"),
        }

        controller
    }

    /// Persisted preference, falling back to the OS color scheme.
    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        let stored = self.page.load(&self.storage_key).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "failed to read theme preference");
            None
        });
        Theme::resolve(stored.as_deref(), self.page.prefers_dark_scheme())
    }

    /// Theme currently shown, read from the root marker.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_dark(
            self.root
                .as_ref()
                .is_some_and(|root| self.page.has_class(root, &self.dark_marker)),
        )
    }

    /// Apply `theme` and persist it. Every call writes storage.
    #[tracing::instrument(skip(self))]
    pub fn set_theme(&self, theme: Theme) {
        if let Some(root) = &self.root {
            if theme.is_dark() {
                self.page.add_class(root, &self.dark_marker);
            } else {
                self.page.remove_class(root, &self.dark_marker);
            }
        }
        if let Err(err) = self.page.store(&self.storage_key, theme.as_str()) {
            tracing::warn!(error = ?err, "failed to persist theme preference");
        }
    }

    /// Switch to the opposite of the current theme.
    pub fn toggle(&self) {
        self.set_theme(self.current().inverted());
    }
}

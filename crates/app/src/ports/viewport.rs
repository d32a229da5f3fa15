//! Viewport port: scrolling and OS-level display preferences.

/// The window the page is displayed in.
pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Smoothly scroll the page back to offset 0.
    fn scroll_to_top(&self);

    /// Whether the OS asks for a dark color scheme.
    fn prefers_dark_scheme(&self) -> bool;

    /// Suspend or restore background page scrolling.
    ///
    /// Behaviors never call this directly; they go through
    /// [`ScrollLock`](crate::scroll_lock::ScrollLock).
    fn set_scroll_locked(&self, locked: bool);
}

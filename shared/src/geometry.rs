//! Viewport geometry rules for the sticky navigation.

/// The content container's top must be at most this far below the viewport
/// top for the page to count as "in the content area".
pub const CONTENT_TOP_THRESHOLD: f64 = 100.0;

/// The content container's bottom must be further below the viewport top
/// than this.
pub const CONTENT_BOTTOM_THRESHOLD: f64 = 200.0;

/// Widths at or below this are laid out as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Vertical extent of the content container relative to the viewport top,
/// as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentRect {
    /// Distance from the viewport top to the container's top edge.
    pub top: f64,
    /// Distance from the viewport top to the container's bottom edge.
    pub bottom: f64,
}

impl ContentRect {
    /// Build a rect from its top and bottom offsets.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the viewport currently sits over the content area.
    pub fn is_in_content_area(&self) -> bool {
        self.top <= CONTENT_TOP_THRESHOLD && self.bottom > CONTENT_BOTTOM_THRESHOLD
    }
}

/// Responsive layout derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Hamburger menu instead of the sticky side nav.
    Mobile,
    /// Sticky side nav.
    Desktop,
}

impl Layout {
    /// Classify a viewport width against [`MOBILE_BREAKPOINT`].
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

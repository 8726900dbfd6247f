//! Navbar scroll styling.

/// Class applied to the navbar once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Whether the navbar should carry the scrolled style at `offset` pixels.
///
/// Strictly greater than: an offset equal to the threshold is not scrolled.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

//! Tab-key focus trapping for open panels.

/// Index to focus when Tab wraps around a panel's `len` focusable controls.
///
/// `active` is the position of the focused control within the panel, if any.
/// Returns `Some` (and the caller must prevent the browser default) when Tab is
/// pressed on the last control or Shift+Tab on the first; otherwise `None` and
/// the browser moves focus normally.
#[must_use]
pub fn focus_trap_target(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(idx), false) if idx == last => Some(0),
        _ => None,
    }
}

use web_sys::Event;
use zakconsult_core::is_scrolled;
use zakconsult_core::scroll::SCROLLED_CLASS;

use crate::dom::{self, WebError};
use crate::view::ScrollView;

/// Keep the navbar's `scrolled` class in step with the window's scroll offset.
///
/// # Errors
/// Returns an error if the window is unavailable or the listener is rejected.
pub fn bind(view: ScrollView, threshold: f64) -> Result<(), WebError> {
    let win = dom::window()?;
    let sync = {
        let win = win.clone();
        move || {
            let offset = win.scroll_y().unwrap_or(0.0);
            dom::set_class(&view.navbar, SCROLLED_CLASS, is_scrolled(offset, threshold));
        }
    };
    sync();
    dom::listen(&win, "scroll", move |_: Event| sync())
}

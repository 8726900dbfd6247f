//! Document-level Escape handling shared by the navigation and toolbar panels.

use std::rc::Rc;

use web_sys::{Document, KeyboardEvent};
use zakconsult_core::{NavEvent, PanelEvent};

use crate::a11y::ToolbarUnit;
use crate::dom::{self, WebError};
use crate::nav::NavUnit;

/// Close whichever panels are open when Escape is pressed.
///
/// # Errors
/// Returns an error if the listener cannot be attached.
pub fn bind_escape(
    doc: &Document,
    nav: Option<Rc<NavUnit>>,
    toolbar: Option<Rc<ToolbarUnit>>,
) -> Result<(), WebError> {
    if nav.is_none() && toolbar.is_none() {
        return Ok(());
    }
    dom::listen(doc, "keydown", move |e: KeyboardEvent| {
        if e.key() != "Escape" {
            return;
        }
        if let Some(nav) = &nav {
            nav.handle(NavEvent::Escape);
        }
        if let Some(toolbar) = &toolbar {
            toolbar.handle_panel(PanelEvent::Escape);
        }
    })
}

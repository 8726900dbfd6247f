use std::rc::Rc;

use web_sys::Event;
use zakconsult_core::{ContactField, FieldError, SiteConfig, ValidContact};

use crate::components::form_success;
use crate::dom::{self, WebError};
use crate::view::ContactView;

/// Hands a `mailto:` URI to whatever opens the visitor's mail client.
pub type Navigate = Rc<dyn Fn(&str) -> Result<(), WebError>>;

/// Wire submit validation and per-field error clearing, opening mail links
/// through `window.location`.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn bind(view: ContactView, cfg: Rc<SiteConfig>) -> Result<(), WebError> {
    bind_with(view, cfg, Rc::new(open_location))
}

/// Same as [`bind`] with a caller-supplied navigation step.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn bind_with(
    view: ContactView,
    cfg: Rc<SiteConfig>,
    navigate: Navigate,
) -> Result<(), WebError> {
    let view = Rc::new(view);
    for field in ContactField::ALL {
        let on_input = Rc::clone(&view);
        dom::listen(&view.control(field).0, "input", move |_: Event| {
            clear_error(&on_input, field);
        })?;
    }

    let on_submit = Rc::clone(&view);
    dom::listen(&view.form, "submit", move |e: Event| {
        e.prevent_default();
        if let Err(err) = submit(&on_submit, &cfg, navigate.as_ref()) {
            log::error!("contact form submission failed: {err}");
        }
    })
}

/// Validate the form and either show errors or hand off to the mail client.
///
/// # Errors
/// Returns an error if navigation to the `mailto:` link is rejected.
pub fn submit(
    view: &ContactView,
    cfg: &SiteConfig,
    navigate: &dyn Fn(&str) -> Result<(), WebError>,
) -> Result<(), WebError> {
    for field in ContactField::ALL {
        clear_error(view, field);
    }
    match view.submission().validate() {
        Ok(valid) => send(view, cfg, &valid, navigate),
        Err(errors) => {
            for error in &errors {
                show_error(view, *error);
            }
            if let Some(first) = errors.first() {
                dom::focus(&view.control(first.field()).0);
            }
            Ok(())
        }
    }
}

fn send(
    view: &ContactView,
    cfg: &SiteConfig,
    valid: &ValidContact,
    navigate: &dyn Fn(&str) -> Result<(), WebError>,
) -> Result<(), WebError> {
    let uri = valid.mailto(&cfg.recipient, &cfg.default_subject);
    log::info!("opening mail client for contact form");
    navigate(&uri)?;
    form_success::render_into(&view.form, &cfg.recipient);
    Ok(())
}

fn open_location(uri: &str) -> Result<(), WebError> {
    dom::window()?.location().set_href(uri)?;
    Ok(())
}

fn show_error(view: &ContactView, error: FieldError) {
    let field = error.field();
    if let Some(slot) = view.error_slot(field) {
        slot.set_text_content(Some(&error.to_string()));
    }
    let control = &view.control(field).0;
    let _ = control.set_attribute("aria-invalid", "true");
    let _ = control.set_attribute("aria-describedby", field.error_id());
}

pub fn clear_error(view: &ContactView, field: ContactField) {
    if let Some(slot) = view.error_slot(field) {
        slot.set_text_content(Some(""));
    }
    let control = &view.control(field).0;
    let _ = control.remove_attribute("aria-invalid");
    let _ = control.remove_attribute("aria-describedby");
}

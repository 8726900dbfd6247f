use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Storage, Window};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("element {0} has an unexpected type")]
    WrongElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the document cannot be accessed from the current window.
pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the window cannot be accessed or storage is blocked.
pub fn local_storage() -> Result<Storage, WebError> {
    window()?
        .local_storage()
        .map_err(|_| WebError::NoStorage)?
        .ok_or(WebError::NoStorage)
}

/// Look up `id` and cast it to the expected element type.
///
/// # Errors
/// Returns an error if the element is absent or of another type.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, WebError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElement(format!("#{id}")))
}

/// Every element under `root` matching `selector`, in document order.
#[must_use]
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect()
}

/// Attach a listener that stays registered for the page's lifetime.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WebError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class` so its presence matches `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = if on {
        el.class_list().add_1(class)
    } else {
        el.class_list().remove_1(class)
    };
}

pub fn set_bool_attr(el: &Element, name: &str, value: bool) {
    let _ = el.set_attribute(name, if value { "true" } else { "false" });
}

pub fn focus(el: &HtmlElement) {
    if let Err(err) = el.focus() {
        log::debug!("focus failed: {}", js_error_message(&err));
    }
}

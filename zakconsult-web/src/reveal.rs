use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use zakconsult_core::reveal::{REDUCED_MOTION_QUERY, VISIBLE_CLASS};
use zakconsult_core::RevealPlan;

use crate::dom::{self, WebError};

/// Read the visitor's reduced-motion preference; unknown means motion is fine.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    dom::window()
        .ok()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Prepare every reveal target and start observing them. Returns the number of targets.
///
/// # Errors
/// Returns an error if the selector is invalid or the observer cannot be created.
pub fn bind(doc: &Document, selector: &str, plan: RevealPlan) -> Result<usize, WebError> {
    let root = doc
        .document_element()
        .ok_or_else(|| WebError::MissingElement("<html>".into()))?;
    let targets = dom::query_all::<Element>(&root, selector);
    let observer = match plan {
        RevealPlan::Immediate => None,
        RevealPlan::Observe { threshold } => Some(observer(threshold)?),
    };
    for el in &targets {
        let _ = el.class_list().add_1(plan.initial_class());
        if let Some(observer) = &observer {
            observer.observe(el);
        }
    }
    log::debug!("reveal plan {plan:?} applied to {} element(s)", targets.len());
    Ok(targets.len())
}

fn observer(threshold: f64) -> Result<IntersectionObserver, WebError> {
    let on_change = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            // One-way: leaving the viewport never hides an element again.
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());
    let observer =
        IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &options)?;
    on_change.forget();
    Ok(observer)
}

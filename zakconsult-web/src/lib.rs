#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use std::rc::Rc;

use zakconsult_core::{RevealPlan, SiteConfig};

pub mod a11y;
pub mod components;
pub mod contact;
pub mod dom;
pub mod keyboard;
pub mod logging;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod view;

use crate::a11y::ToolbarUnit;
use crate::dom::WebError;
use crate::nav::NavUnit;
use crate::storage::PageStore;
use crate::view::SiteView;

/// Handles on the units that started.
pub struct Site {
    pub nav: Option<Rc<NavUnit>>,
    pub toolbar: Option<Rc<ToolbarUnit>>,
    pub reveal_targets: usize,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    match boot(&SiteConfig::load_from_static()) {
        Ok(site) => log::info!(
            "site interactions ready (nav={}, toolbar={}, reveal targets={})",
            site.nav.is_some(),
            site.toolbar.is_some(),
            site.reveal_targets
        ),
        Err(err) => log::error!("site interactions failed to start: {err}"),
    }
}

/// Bind every unit the current document supports.
///
/// A unit whose anchors are missing or whose listeners fail is skipped with a
/// warning; the rest of the page keeps working.
///
/// # Errors
/// Returns an error only when there is no document to bind to.
pub fn boot(cfg: &SiteConfig) -> Result<Site, WebError> {
    let doc = dom::document()?;
    let SiteView {
        scroll: scroll_view,
        nav: nav_view,
        contact: contact_view,
        toolbar: toolbar_view,
    } = SiteView::bind(&doc);

    if let Some(view) = scroll_view {
        started("scroll chrome", scroll::bind(view, cfg.scroll_threshold_px));
    }
    let nav = nav_view.and_then(|view| started("navigation", NavUnit::bind(view)));
    let reveal_targets = started(
        "reveal on scroll",
        reveal::bind(
            &doc,
            &cfg.reveal_selector,
            RevealPlan::for_motion(reveal::prefers_reduced_motion(), cfg.reveal_threshold),
        ),
    )
    .unwrap_or(0);
    if let Some(view) = contact_view {
        started("contact form", contact::bind(view, Rc::new(cfg.clone())));
    }
    let toolbar = toolbar_view.and_then(|view| {
        started(
            "accessibility toolbar",
            ToolbarUnit::bind(view, PageStore::open()),
        )
    });
    started(
        "escape handling",
        keyboard::bind_escape(&doc, nav.clone(), toolbar.clone()),
    );

    Ok(Site {
        nav,
        toolbar,
        reveal_targets,
    })
}

fn started<T>(unit: &str, result: Result<T, WebError>) -> Option<T> {
    result
        .map_err(|err| log::warn!("{unit} disabled: {err}"))
        .ok()
}

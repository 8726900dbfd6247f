//! Accessibility toolbar: disclosure panel, focus trap and persisted preferences.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node};
use zakconsult_core::prefs::{ACTIVE_CLASS, FONT_SCALE_VAR};
use zakconsult_core::{
    A11yFlag, A11yPreferences, PanelDisclosure, PanelEffect, PanelEvent, PreferenceController,
    focus_trap_target,
};

use crate::dom::{self, WebError};
use crate::storage::PageStore;
use crate::view::ToolbarView;

const TOOLBAR_BUTTON: &str = ".a11y-btn";

pub struct ToolbarUnit {
    view: ToolbarView,
    panel: RefCell<PanelDisclosure>,
    prefs: RefCell<PreferenceController<PageStore>>,
}

impl ToolbarUnit {
    /// Apply persisted preferences and wire every toolbar control.
    ///
    /// # Errors
    /// Returns an error if a listener cannot be attached.
    pub fn bind(view: ToolbarView, store: PageStore) -> Result<Rc<Self>, WebError> {
        let prefs = PreferenceController::load(store);
        let unit = Rc::new(Self {
            view,
            panel: RefCell::new(PanelDisclosure::new()),
            prefs: RefCell::new(prefs),
        });
        let loaded = *unit.prefs.borrow().preferences();
        unit.apply_preferences(&loaded);
        let initial = unit.panel.borrow().current();
        unit.render_panel(initial);

        let this = Rc::clone(&unit);
        dom::listen(&unit.view.toggle, "click", move |_: Event| {
            this.handle_panel(PanelEvent::Toggle);
        })?;

        let this = Rc::clone(&unit);
        let document = dom::document()?;
        dom::listen(&document, "click", move |e: Event| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| this.view.root.contains(Some(&node)));
            if !inside {
                this.handle_panel(PanelEvent::OutsideClick);
            }
        })?;

        let this = Rc::clone(&unit);
        dom::listen(&unit.view.panel, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Tab" {
                this.trap_focus(&e);
            }
        })?;

        let this = Rc::clone(&unit);
        dom::listen(&unit.view.font_increase, "click", move |_: Event| {
            let prefs = this.prefs.borrow_mut().increase_font();
            this.apply_preferences(&prefs);
        })?;

        let this = Rc::clone(&unit);
        dom::listen(&unit.view.font_decrease, "click", move |_: Event| {
            let prefs = this.prefs.borrow_mut().decrease_font();
            this.apply_preferences(&prefs);
        })?;

        for (flag, control) in &unit.view.flags {
            let this = Rc::clone(&unit);
            let flag = *flag;
            dom::listen(control, "click", move |_: Event| {
                let prefs = this.prefs.borrow_mut().toggle(flag);
                this.apply_preferences(&prefs);
            })?;
        }

        let this = Rc::clone(&unit);
        dom::listen(&unit.view.reset, "click", move |_: Event| this.reset())?;

        Ok(unit)
    }

    pub fn handle_panel(&self, event: PanelEvent) {
        let effect = self.panel.borrow_mut().apply(event);
        self.render_panel(effect);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.borrow().is_open()
    }

    #[must_use]
    pub fn preferences(&self) -> A11yPreferences {
        *self.prefs.borrow().preferences()
    }

    pub fn reset(&self) {
        let prefs = self.prefs.borrow_mut().reset();
        for button in self.panel_buttons(TOOLBAR_BUTTON) {
            dom::set_class(&button, ACTIVE_CLASS, false);
            if button.has_attribute("aria-pressed") {
                dom::set_bool_attr(&button, "aria-pressed", false);
            }
        }
        self.apply_preferences(&prefs);
    }

    /// Mirror `prefs` onto the document: font variable, body classes, control state.
    fn apply_preferences(&self, prefs: &A11yPreferences) {
        let scale = prefs.font_scale.to_string();
        if let Err(err) = self.view.html.style().set_property(FONT_SCALE_VAR, &scale) {
            log::warn!("failed to set {FONT_SCALE_VAR}: {}", dom::js_error_message(&err));
        }
        for (flag, enabled) in prefs.flags() {
            dom::set_class(&self.view.body, flag.class_name(), enabled);
            if let Some(control) = self.view.flag_control(flag) {
                dom::set_class(control, ACTIVE_CLASS, enabled);
                dom::set_bool_attr(control, "aria-pressed", enabled);
            }
        }
    }

    fn render_panel(&self, effect: PanelEffect) {
        if effect.sync {
            self.view.panel.set_hidden(!effect.open);
            dom::set_bool_attr(&self.view.toggle, "aria-expanded", effect.open);
        }
        if effect.focus_first {
            if let Some(first) = self.panel_buttons(TOOLBAR_BUTTON).first() {
                dom::focus(first);
            }
        }
        if effect.focus_toggle {
            dom::focus(&self.view.toggle);
        }
    }

    fn trap_focus(&self, e: &KeyboardEvent) {
        let buttons = self.panel_buttons("button");
        let active = dom::document()
            .ok()
            .and_then(|doc| doc.active_element());
        let position = active.and_then(|active| {
            buttons
                .iter()
                .position(|b| AsRef::<Element>::as_ref(b) == &active)
        });
        if let Some(target) = focus_trap_target(buttons.len(), position, e.shift_key()) {
            e.prevent_default();
            dom::focus(&buttons[target]);
        }
    }

    fn panel_buttons(&self, selector: &str) -> Vec<HtmlElement> {
        dom::query_all::<HtmlElement>(&self.view.panel, selector)
    }

    /// Flag controls currently reporting `aria-pressed="true"`.
    #[must_use]
    pub fn pressed_flags(&self) -> Vec<A11yFlag> {
        self.view
            .flags
            .iter()
            .filter(|(_, el)| el.get_attribute("aria-pressed").as_deref() == Some("true"))
            .map(|(flag, _)| *flag)
            .collect()
    }
}

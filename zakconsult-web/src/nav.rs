use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Event, HtmlAnchorElement};
use zakconsult_core::nav::NAV_OPEN_CLASS;
use zakconsult_core::{NavDisclosure, NavEffect, NavEvent};

use crate::dom::{self, WebError};
use crate::view::NavView;

pub struct NavUnit {
    view: NavView,
    state: RefCell<NavDisclosure>,
}

impl NavUnit {
    /// Wire the toggle and every link inside the panel.
    ///
    /// # Errors
    /// Returns an error if a listener cannot be attached.
    pub fn bind(view: NavView) -> Result<Rc<Self>, WebError> {
        let unit = Rc::new(Self {
            view,
            state: RefCell::new(NavDisclosure::new()),
        });
        let initial = unit.state.borrow().current();
        unit.render(initial);

        let on_toggle = Rc::clone(&unit);
        dom::listen(&unit.view.toggle, "click", move |_: Event| {
            on_toggle.handle(NavEvent::Toggle);
        })?;

        for link in dom::query_all::<HtmlAnchorElement>(&unit.view.links, "a") {
            let on_link = Rc::clone(&unit);
            dom::listen(&link, "click", move |_: Event| {
                on_link.handle(NavEvent::LinkActivated);
            })?;
        }
        Ok(unit)
    }

    pub fn handle(&self, event: NavEvent) {
        let effect = self.state.borrow_mut().apply(event);
        self.render(effect);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn render(&self, effect: NavEffect) {
        if effect.sync {
            dom::set_class(&self.view.links, NAV_OPEN_CLASS, effect.open);
            dom::set_bool_attr(&self.view.toggle, "aria-expanded", effect.open);
        }
        if effect.focus_toggle {
            dom::focus(&self.view.toggle);
        }
    }
}

//! Typed handles on the page markup, resolved once at startup.
//!
//! Each unit gets its own view so a page missing, say, the contact form still
//! gets a working navbar and toolbar.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};
use zakconsult_core::{A11yFlag, ContactField, ContactSubmission};

use crate::dom::{WebError, by_id};

#[derive(Clone)]
pub struct ScrollView {
    pub navbar: Element,
}

impl ScrollView {
    /// # Errors
    /// Returns an error if `#navbar` is missing.
    pub fn bind(doc: &Document) -> Result<Self, WebError> {
        Ok(Self {
            navbar: by_id(doc, "navbar")?,
        })
    }
}

#[derive(Clone)]
pub struct NavView {
    pub toggle: HtmlElement,
    pub links: Element,
}

impl NavView {
    /// # Errors
    /// Returns an error if the toggle or links panel is missing.
    pub fn bind(doc: &Document) -> Result<Self, WebError> {
        Ok(Self {
            toggle: by_id(doc, "nav-toggle")?,
            links: by_id(doc, "nav-links")?,
        })
    }
}

/// An `<input>` or `<textarea>`.
#[derive(Clone)]
pub struct FormControl(pub HtmlElement);

impl FormControl {
    #[must_use]
    pub fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            self.0.text_content().unwrap_or_default()
        }
    }
}

#[derive(Clone)]
pub struct ContactView {
    pub form: HtmlFormElement,
    pub name: FormControl,
    pub email: FormControl,
    pub message: FormControl,
    pub subject: Option<FormControl>,
    errors: [Option<Element>; 3],
}

impl ContactView {
    /// # Errors
    /// Returns an error if the form or one of its required fields is missing.
    pub fn bind(doc: &Document) -> Result<Self, WebError> {
        let control = |id: &str| by_id::<HtmlElement>(doc, id).map(FormControl);
        Ok(Self {
            form: by_id(doc, "contact-form")?,
            name: control(ContactField::Name.id())?,
            email: control(ContactField::Email.id())?,
            message: control(ContactField::Message.id())?,
            subject: control("subject").ok(),
            errors: ContactField::ALL.map(|f| doc.get_element_by_id(f.error_id())),
        })
    }

    #[must_use]
    pub const fn control(&self, field: ContactField) -> &FormControl {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Error container for `field`; optional in the markup.
    #[must_use]
    pub fn error_slot(&self, field: ContactField) -> Option<&Element> {
        let idx = ContactField::ALL.iter().position(|f| *f == field)?;
        self.errors[idx].as_ref()
    }

    #[must_use]
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(
            &self.name.value(),
            &self.email.value(),
            &self.subject.as_ref().map(FormControl::value).unwrap_or_default(),
            &self.message.value(),
        )
    }
}

#[derive(Clone)]
pub struct ToolbarView {
    /// The `.a11y-toolbar` region; clicks outside it close the panel.
    pub root: Element,
    pub toggle: HtmlElement,
    pub panel: HtmlElement,
    pub font_increase: HtmlElement,
    pub font_decrease: HtmlElement,
    pub reset: HtmlElement,
    pub flags: Vec<(A11yFlag, HtmlElement)>,
    pub html: HtmlElement,
    pub body: HtmlElement,
}

impl ToolbarView {
    /// # Errors
    /// Returns an error if any toolbar control is missing.
    pub fn bind(doc: &Document) -> Result<Self, WebError> {
        let root = doc
            .query_selector(".a11y-toolbar")?
            .ok_or_else(|| WebError::MissingElement(".a11y-toolbar".into()))?;
        let flags = A11yFlag::ALL
            .into_iter()
            .map(|flag| by_id::<HtmlElement>(doc, flag.control_id()).map(|el| (flag, el)))
            .collect::<Result<Vec<_>, _>>()?;
        let html = doc
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| WebError::MissingElement("<html>".into()))?;
        let body = doc
            .body()
            .ok_or_else(|| WebError::MissingElement("<body>".into()))?;
        Ok(Self {
            root,
            toggle: by_id(doc, "a11y-toggle")?,
            panel: by_id(doc, "a11y-panel")?,
            font_increase: by_id(doc, "a11y-font-increase")?,
            font_decrease: by_id(doc, "a11y-font-decrease")?,
            reset: by_id(doc, "a11y-reset")?,
            flags,
            html,
            body,
        })
    }

    #[must_use]
    pub fn flag_control(&self, flag: A11yFlag) -> Option<&HtmlElement> {
        self.flags
            .iter()
            .find_map(|(f, el)| (*f == flag).then_some(el))
    }
}

/// All unit views; `None` where the page lacks the unit's anchors.
pub struct SiteView {
    pub scroll: Option<ScrollView>,
    pub nav: Option<NavView>,
    pub contact: Option<ContactView>,
    pub toolbar: Option<ToolbarView>,
}

impl SiteView {
    #[must_use]
    pub fn bind(doc: &Document) -> Self {
        Self {
            scroll: optional("scroll chrome", ScrollView::bind(doc)),
            nav: optional("navigation", NavView::bind(doc)),
            contact: optional("contact form", ContactView::bind(doc)),
            toolbar: optional("accessibility toolbar", ToolbarView::bind(doc)),
        }
    }
}

fn optional<T>(unit: &str, bound: Result<T, WebError>) -> Option<T> {
    bound
        .map_err(|err| log::warn!("{unit} disabled: {err}"))
        .ok()
}

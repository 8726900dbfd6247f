//! ZakConsult site interactions
//!
//! Platform-agnostic core logic for the ZakConsult marketing site.
//! This crate holds every decision the page makes (scroll styling, disclosure
//! state, form validation, accessibility preferences) without touching the DOM,
//! so the browser shell only has to read inputs and apply effects.

#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
pub mod focus;
pub mod nav;
pub mod panel;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, SiteConfig};
pub use contact::{
    ContactField, ContactSubmission, FieldError, ValidContact, is_valid_email, mailto_href,
};
pub use focus::focus_trap_target;
pub use nav::{NavDisclosure, NavEffect, NavEvent};
pub use panel::{PanelDisclosure, PanelEffect, PanelEvent};
pub use prefs::{
    A11yFlag, A11yPreferences, FONT_SCALE_KEY, FontScale, PreferenceController, storage_keys,
};
pub use reveal::RevealPlan;
pub use scroll::is_scrolled;
pub use store::{MemoryStore, StoreError};

/// Trait for abstracting string key-value persistence
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` from the store. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

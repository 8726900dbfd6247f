//! Accessibility toolbar preferences.
//!
//! [`PreferenceController`] owns the visitor's [`A11yPreferences`] and the store
//! they persist to. Every mutation writes through immediately and returns the
//! resulting snapshot, which the shell re-applies to the document so the page
//! and storage never disagree.

use std::fmt;

use crate::KeyValueStore;

pub const FONT_SCALE_KEY: &str = "a11y-font-scale";
/// CSS custom property on `<html>` carrying the font multiplier.
pub const FONT_SCALE_VAR: &str = "--font-scale";
/// Class a pressed toolbar control carries.
pub const ACTIVE_CLASS: &str = "active";

/// Font multiplier stored in tenths so stepping never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontScale(u8);

impl FontScale {
    pub const MIN: Self = Self(8);
    pub const MAX: Self = Self(15);
    pub const DEFAULT: Self = Self(10);

    /// Parse a persisted decimal string, rounding to tenths and clamping into range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_stored(raw: &str) -> Option<Self> {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let tenths = (value * 10.0)
            .round()
            .clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0));
        Some(Self(tenths as u8))
    }

    #[must_use]
    pub const fn tenths(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn increased(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    #[must_use]
    pub const fn decreased(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Same text a JavaScript number would produce: `1`, `1.1`, `0.8`.
impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = (self.0 / 10, self.0 % 10);
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{frac}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum A11yFlag {
    HighContrast,
    Grayscale,
    UnderlineLinks,
    ReadableFont,
}

impl A11yFlag {
    pub const ALL: [Self; 4] = [
        Self::HighContrast,
        Self::Grayscale,
        Self::UnderlineLinks,
        Self::ReadableFont,
    ];

    /// Class toggled on `<body>`.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::HighContrast => "high-contrast",
            Self::Grayscale => "grayscale",
            Self::UnderlineLinks => "underline-links",
            Self::ReadableFont => "readable-font",
        }
    }

    /// Id of the toolbar button controlling this flag.
    #[must_use]
    pub const fn control_id(self) -> &'static str {
        match self {
            Self::HighContrast => "a11y-high-contrast",
            Self::Grayscale => "a11y-grayscale",
            Self::UnderlineLinks => "a11y-links-underline",
            Self::ReadableFont => "a11y-readable-font",
        }
    }

    /// Storage key, always `a11y-` followed by the class name.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::HighContrast => "a11y-high-contrast",
            Self::Grayscale => "a11y-grayscale",
            Self::UnderlineLinks => "a11y-underline-links",
            Self::ReadableFont => "a11y-readable-font",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::HighContrast => 0,
            Self::Grayscale => 1,
            Self::UnderlineLinks => 2,
            Self::ReadableFont => 3,
        }
    }
}

/// Every key the toolbar may write.
#[must_use]
pub fn storage_keys() -> [&'static str; 5] {
    [
        FONT_SCALE_KEY,
        A11yFlag::HighContrast.storage_key(),
        A11yFlag::Grayscale.storage_key(),
        A11yFlag::UnderlineLinks.storage_key(),
        A11yFlag::ReadableFont.storage_key(),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct A11yPreferences {
    pub font_scale: FontScale,
    flags: [bool; 4],
}

impl A11yPreferences {
    #[must_use]
    pub const fn is_enabled(&self, flag: A11yFlag) -> bool {
        self.flags[flag.index()]
    }

    pub fn set(&mut self, flag: A11yFlag, enabled: bool) {
        self.flags[flag.index()] = enabled;
    }

    /// Flags paired with their current value.
    pub fn flags(&self) -> impl Iterator<Item = (A11yFlag, bool)> + '_ {
        A11yFlag::ALL.into_iter().map(|flag| (flag, self.is_enabled(flag)))
    }
}

pub struct PreferenceController<S: KeyValueStore> {
    store: S,
    prefs: A11yPreferences,
}

impl<S: KeyValueStore> PreferenceController<S> {
    /// Read persisted preferences. Unreadable entries fall back to defaults.
    pub fn load(store: S) -> Self {
        let mut prefs = A11yPreferences::default();
        if let Some(scale) =
            read(&store, FONT_SCALE_KEY).and_then(|raw| FontScale::from_stored(&raw))
        {
            prefs.font_scale = scale;
        }
        for flag in A11yFlag::ALL {
            let enabled = read(&store, flag.storage_key()).is_some_and(|v| v == "true");
            prefs.set(flag, enabled);
        }
        log::debug!("loaded a11y preferences: {prefs:?}");
        Self { store, prefs }
    }

    #[must_use]
    pub const fn preferences(&self) -> &A11yPreferences {
        &self.prefs
    }

    pub fn increase_font(&mut self) -> A11yPreferences {
        self.step_font(FontScale::increased)
    }

    pub fn decrease_font(&mut self) -> A11yPreferences {
        self.step_font(FontScale::decreased)
    }

    fn step_font(&mut self, step: fn(FontScale) -> FontScale) -> A11yPreferences {
        let next = step(self.prefs.font_scale);
        if next != self.prefs.font_scale {
            self.prefs.font_scale = next;
            self.write(FONT_SCALE_KEY, &next.to_string());
        }
        self.prefs
    }

    pub fn toggle(&mut self, flag: A11yFlag) -> A11yPreferences {
        let enabled = !self.prefs.is_enabled(flag);
        self.prefs.set(flag, enabled);
        self.write(flag.storage_key(), if enabled { "true" } else { "false" });
        self.prefs
    }

    /// Restore defaults and erase every persisted key.
    pub fn reset(&mut self) -> A11yPreferences {
        self.prefs = A11yPreferences::default();
        for key in storage_keys() {
            if let Err(err) = self.store.delete(key) {
                log::warn!("failed to clear {key}: {err}");
            }
        }
        self.prefs
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            log::warn!("failed to persist {key}={value}: {err}");
        }
    }
}

fn read<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|err| {
        log::warn!("failed to read {key}: {err}");
        None
    })
}

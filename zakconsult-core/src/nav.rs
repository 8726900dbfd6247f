//! Mobile navigation disclosure.
//!
//! The links panel is either open or closed. Every transition reports the
//! resulting state so the shell can mirror it into the panel's `active` class
//! and the toggle's `aria-expanded` attribute.

/// Class the links panel carries while open.
pub const NAV_OPEN_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The hamburger toggle was activated.
    Toggle,
    /// A link inside the panel was followed.
    LinkActivated,
    /// Escape was pressed anywhere in the document.
    Escape,
}

/// What the shell must apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEffect {
    pub open: bool,
    /// Re-sync the panel class and `aria-expanded`.
    pub sync: bool,
    /// Move keyboard focus back to the toggle.
    pub focus_toggle: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDisclosure {
    open: bool,
}

impl NavDisclosure {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Effect that writes the current state to the page without moving focus.
    #[must_use]
    pub const fn current(&self) -> NavEffect {
        NavEffect {
            open: self.open,
            sync: true,
            focus_toggle: false,
        }
    }

    pub fn apply(&mut self, event: NavEvent) -> NavEffect {
        let was_open = self.open;
        match event {
            NavEvent::Toggle => {
                self.open = !self.open;
                log::debug!("nav toggled, open={}", self.open);
                NavEffect {
                    open: self.open,
                    sync: true,
                    focus_toggle: false,
                }
            }
            NavEvent::LinkActivated => {
                self.open = false;
                NavEffect {
                    open: false,
                    sync: true,
                    focus_toggle: false,
                }
            }
            NavEvent::Escape => {
                self.open = false;
                NavEffect {
                    open: false,
                    sync: was_open,
                    focus_toggle: was_open,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggle_flips() {
        let mut nav = NavDisclosure::new();
        assert!(!nav.is_open());
        assert!(nav.apply(NavEvent::Toggle).open);
        assert!(!nav.apply(NavEvent::Toggle).open);
    }

    #[test]
    fn current_state_syncs_without_focus() {
        let mut nav = NavDisclosure::new();
        let initial = nav.current();
        assert!(initial.sync && !initial.open && !initial.focus_toggle);
        nav.apply(NavEvent::Toggle);
        assert!(nav.current().open);
    }

    #[test]
    fn link_click_forces_closed_even_when_closed() {
        let mut nav = NavDisclosure::new();
        let effect = nav.apply(NavEvent::LinkActivated);
        assert!(!effect.open);
        assert!(effect.sync);
        nav.apply(NavEvent::Toggle);
        assert!(!nav.apply(NavEvent::LinkActivated).open);
    }

    #[test]
    fn escape_returns_focus_only_when_it_closed_the_panel() {
        let mut nav = NavDisclosure::new();
        let idle = nav.apply(NavEvent::Escape);
        assert!(!idle.focus_toggle);
        assert!(!idle.sync);

        nav.apply(NavEvent::Toggle);
        let closing = nav.apply(NavEvent::Escape);
        assert!(closing.focus_toggle);
        assert!(!closing.open);
        assert!(!nav.is_open());
    }

    #[test]
    fn final_state_follows_last_transition() {
        let sequences: [&[NavEvent]; 4] = [
            &[NavEvent::Toggle, NavEvent::Toggle, NavEvent::Toggle],
            &[NavEvent::Toggle, NavEvent::LinkActivated],
            &[NavEvent::Escape, NavEvent::Toggle],
            &[NavEvent::Toggle, NavEvent::Escape, NavEvent::Toggle, NavEvent::LinkActivated],
        ];
        let expected = [true, false, true, false];
        for (events, want) in sequences.iter().zip(expected) {
            let mut nav = NavDisclosure::new();
            let mut last = None;
            for event in *events {
                last = Some(nav.apply(*event));
            }
            assert_eq!(last.map(|e| e.open), Some(want));
            assert_eq!(nav.is_open(), want);
        }
    }
}

//! Accessibility toolbar disclosure panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Toggle,
    /// A click landed outside the toolbar region.
    OutsideClick,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEffect {
    pub open: bool,
    /// Re-sync `hidden` on the panel and `aria-expanded` on the toggle.
    pub sync: bool,
    /// Focus the first control inside the panel.
    pub focus_first: bool,
    /// Return focus to the toolbar toggle.
    pub focus_toggle: bool,
}

impl PanelEffect {
    const fn idle(open: bool) -> Self {
        Self {
            open,
            sync: false,
            focus_first: false,
            focus_toggle: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelDisclosure {
    open: bool,
}

impl PanelDisclosure {
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
    pub const fn current(&self) -> PanelEffect {
        PanelEffect {
            sync: true,
            ..PanelEffect::idle(self.open)
        }
    }

    pub fn apply(&mut self, event: PanelEvent) -> PanelEffect {
        match event {
            PanelEvent::Toggle => {
                self.open = !self.open;
                log::debug!("a11y panel toggled, open={}", self.open);
                PanelEffect {
                    open: self.open,
                    sync: true,
                    focus_first: self.open,
                    focus_toggle: false,
                }
            }
            PanelEvent::OutsideClick if self.open => {
                self.open = false;
                PanelEffect {
                    sync: true,
                    ..PanelEffect::idle(false)
                }
            }
            PanelEvent::Escape if self.open => {
                self.open = false;
                PanelEffect {
                    sync: true,
                    focus_toggle: true,
                    ..PanelEffect::idle(false)
                }
            }
            PanelEvent::OutsideClick | PanelEvent::Escape => PanelEffect::idle(self.open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_focuses_first_control() {
        let mut panel = PanelDisclosure::new();
        let effect = panel.apply(PanelEvent::Toggle);
        assert!(effect.open && effect.sync && effect.focus_first);
        let effect = panel.apply(PanelEvent::Toggle);
        assert!(!effect.open);
        assert!(!effect.focus_first);
    }

    #[test]
    fn current_state_syncs_without_focus() {
        let mut panel = PanelDisclosure::new();
        let initial = panel.current();
        assert!(initial.sync && !initial.open);
        assert!(!initial.focus_first && !initial.focus_toggle);
        panel.apply(PanelEvent::Toggle);
        assert!(panel.current().open);
        assert!(!panel.current().focus_first);
    }

    #[test]
    fn outside_click_closes_without_moving_focus() {
        let mut panel = PanelDisclosure::new();
        panel.apply(PanelEvent::Toggle);
        let effect = panel.apply(PanelEvent::OutsideClick);
        assert!(!effect.open);
        assert!(effect.sync);
        assert!(!effect.focus_toggle);
    }

    #[test]
    fn escape_closes_and_returns_focus() {
        let mut panel = PanelDisclosure::new();
        panel.apply(PanelEvent::Toggle);
        let effect = panel.apply(PanelEvent::Escape);
        assert!(!effect.open);
        assert!(effect.focus_toggle);
    }

    #[test]
    fn closed_panel_ignores_outside_click_and_escape() {
        let mut panel = PanelDisclosure::new();
        assert_eq!(panel.apply(PanelEvent::OutsideClick), PanelEffect::idle(false));
        assert_eq!(panel.apply(PanelEvent::Escape), PanelEffect::idle(false));
    }
}

//! Fade-in on scroll.

/// Class marking an element that has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Class applied before the reveal animation runs.
pub const FADE_IN_CLASS: &str = "fade-in";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// How reveal targets are handled for the current visitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPlan {
    /// Reduced motion: every target is visible straight away and nothing is observed.
    Immediate,
    /// Targets start faded out and are revealed once `threshold` of them is in view.
    Observe { threshold: f64 },
}

impl RevealPlan {
    #[must_use]
    pub fn for_motion(reduced_motion: bool, threshold: f64) -> Self {
        if reduced_motion {
            Self::Immediate
        } else {
            Self::Observe { threshold }
        }
    }

    /// Classes an element receives when the plan is applied at startup.
    #[must_use]
    pub const fn initial_class(&self) -> &'static str {
        match self {
            Self::Immediate => VISIBLE_CLASS,
            Self::Observe { .. } => FADE_IN_CLASS,
        }
    }
}

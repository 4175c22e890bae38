//! Environment signals read once when a page installs its behaviors.

/// Media query matching the reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// How programmatic scrolling should animate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollStyle {
    Smooth,
    Instant,
}

/// Snapshot of the user's motion preference and viewport size.
///
/// Never re-read on resize or preference change: behaviors decide once at
/// install time whether they run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub prefers_reduced_motion: bool,
    pub viewport_width: f64,
}

impl Environment {
    pub fn new(prefers_reduced_motion: bool, viewport_width: f64) -> Self {
        Self {
            prefers_reduced_motion,
            viewport_width,
        }
    }

    /// Carousels, parallax and counters run only when this is true
    pub fn allows_motion(&self) -> bool {
        !self.prefers_reduced_motion
    }

    /// Cursor, tilt and magnetic effects need motion and a desktop-sized viewport
    pub fn allows_pointer_effects(&self, breakpoint: f64) -> bool {
        self.allows_motion() && self.viewport_width > breakpoint
    }

    pub fn scroll_style(&self) -> ScrollStyle {
        if self.prefers_reduced_motion {
            ScrollStyle::Instant
        } else {
            ScrollStyle::Smooth
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(false, 1280.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_blocks_everything() {
        let env = Environment::new(true, 1920.0);
        assert!(!env.allows_motion());
        assert!(!env.allows_pointer_effects(1024.0));
        assert_eq!(env.scroll_style(), ScrollStyle::Instant);
    }

    #[test]
    fn test_breakpoint_is_inclusive_for_narrow() {
        assert!(!Environment::new(false, 1024.0).allows_pointer_effects(1024.0));
        assert!(Environment::new(false, 1025.0).allows_pointer_effects(1024.0));
        assert!(Environment::new(false, 800.0).allows_motion());
    }

    #[test]
    fn test_default_is_desktop_with_motion() {
        let env = Environment::default();
        assert!(env.allows_pointer_effects(1024.0));
        assert_eq!(env.scroll_style(), ScrollStyle::Smooth);
    }
}

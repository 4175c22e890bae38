//! Small page interactions: expandable cards and in-page anchor scrolling

/// At most one open card; clicking the open card closes it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on card `index` and return the card left open, if any
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

/// Selector for an in-page link target; `None` for a bare `#` or non-fragment hrefs
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target lands just below a fixed nav
pub fn scroll_destination(target_top: f64, scroll_y: f64, offset: f64) -> f64 {
    target_top + scroll_y - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_opens_one() {
        let mut cards = Accordion::new();
        assert_eq!(cards.toggle(1), Some(1));
        assert_eq!(cards.toggle(2), Some(2));
        assert!(cards.is_open(2));
        assert!(!cards.is_open(1));
    }

    #[test]
    fn test_accordion_closes_open_card() {
        let mut cards = Accordion::new();
        cards.toggle(0);
        assert_eq!(cards.toggle(0), None);
        assert_eq!(cards.open(), None);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#waitlist"), Some("#waitlist"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/v2#waitlist"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn test_scroll_destination() {
        assert_eq!(scroll_destination(400.0, 1200.0, 100.0), 1500.0);
        assert_eq!(scroll_destination(-200.0, 1200.0, 72.0), 928.0);
    }
}

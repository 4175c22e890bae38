//! One-shot visibility triggers
//!
//! [`OnceTracker`] holds the bookkeeping behind reveal animations, counters and
//! lazy images: every watched key fires at most once, the first time it is
//! reported at or above the threshold, and is dropped from the watch set
//! afterwards. The browser layer feeds it `IntersectionObserver` entries.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Tolerance for intersection ratios reported a hair below the threshold
const RATIO_EPSILON: f64 = 1e-6;

/// One side of a root margin
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(v) => write!(f, "{v}px"),
            MarginValue::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Parsed CSS-style root margin (`top right bottom left`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginValue::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

/// Error parsing a root margin string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootMarginError {
    #[error("root margin must have 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("invalid root margin value `{0}` (expected px or %)")]
    Value(String),
}

impl RootMargin {
    /// Parse the CSS margin shorthand accepted by `IntersectionObserver`
    pub fn parse(input: &str) -> Result<Self, RootMarginError> {
        let values = input
            .split_whitespace()
            .map(parse_margin_value)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Self {
                top: *all,
                right: *all,
                bottom: *all,
                left: *all,
            }),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            other => Err(RootMarginError::Arity(other.len())),
        }
    }

    /// Normalized four-value form handed to the browser
    pub fn to_css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

fn parse_margin_value(token: &str) -> Result<MarginValue, RootMarginError> {
    let invalid = || RootMarginError::Value(token.to_string());
    if let Some(number) = token.strip_suffix("px") {
        number.parse().map(MarginValue::Px).map_err(|_| invalid())
    } else if let Some(number) = token.strip_suffix('%') {
        number.parse().map(MarginValue::Percent).map_err(|_| invalid())
    } else if token == "0" {
        Ok(MarginValue::Px(0.0))
    } else {
        Err(invalid())
    }
}

/// One intersection report for a watched element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_EPSILON >= threshold
    }
}

/// Watch set that fires each key at most once
#[derive(Debug, Clone)]
pub struct OnceTracker<K> {
    threshold: f64,
    watching: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OnceTracker<K> {
    pub fn new(threshold: f64, keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            threshold,
            watching: keys.into_iter().collect(),
            fired: HashSet::new(),
        }
    }

    /// Record an intersection; returns `true` exactly when the key fires
    pub fn report(&mut self, key: &K, intersection: Intersection) -> bool {
        if !intersection.meets(self.threshold) || !self.watching.remove(key) {
            return false;
        }
        self.fired.insert(key.clone());
        true
    }

    /// Fire every key still being watched (used when visibility cannot be observed)
    pub fn fire_all(&mut self) -> Vec<K> {
        let keys: Vec<K> = self.watching.drain().collect();
        self.fired.extend(keys.iter().cloned());
        keys
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    /// Nothing left to observe
    pub fn is_done(&self) -> bool {
        self.watching.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Stagger delay from a `data-delay` attribute, 0 when absent or unparsable
pub fn parse_delay_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms.round() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_values() {
        let margin = RootMargin::parse("0px 0px -50px 0px").unwrap();
        assert_eq!(margin.bottom, MarginValue::Px(-50.0));
        assert_eq!(margin.top, MarginValue::Px(0.0));
        assert_eq!(margin.to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn test_parse_shorthands() {
        let two = RootMargin::parse("50px 0px").unwrap();
        assert_eq!(two.top, MarginValue::Px(50.0));
        assert_eq!(two.bottom, MarginValue::Px(50.0));
        assert_eq!(two.left, MarginValue::Px(0.0));

        let one = RootMargin::parse("10%").unwrap();
        assert_eq!(one.right, MarginValue::Percent(10.0));

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.left, MarginValue::Px(2.0));
        assert_eq!(three.bottom, MarginValue::Px(3.0));

        assert_eq!(RootMargin::parse("0").unwrap(), RootMargin::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(RootMargin::parse(""), Err(RootMarginError::Arity(0)));
        assert_eq!(
            RootMargin::parse("1px 2px 3px 4px 5px"),
            Err(RootMarginError::Arity(5))
        );
        assert_eq!(
            RootMargin::parse("10em"),
            Err(RootMarginError::Value("10em".to_string()))
        );
    }

    #[test]
    fn test_fires_once_per_key() {
        let mut tracker = OnceTracker::new(0.15, [1usize, 2, 3]);

        assert!(!tracker.report(&1, Intersection::visible(0.05)));
        assert!(tracker.report(&1, Intersection::visible(0.2)));

        // Scrolling away and back never retriggers
        assert!(!tracker.report(&1, Intersection::hidden()));
        assert!(!tracker.report(&1, Intersection::visible(1.0)));

        assert!(tracker.has_fired(&1));
        assert!(!tracker.is_watching(&1));
        assert!(tracker.is_watching(&2));
    }

    #[test]
    fn test_requires_intersecting() {
        let mut tracker = OnceTracker::new(0.0, ["hero"]);
        let edge = Intersection {
            is_intersecting: false,
            ratio: 0.0,
        };
        assert!(!tracker.report(&"hero", edge));
        assert!(tracker.report(&"hero", Intersection::visible(0.0)));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut tracker = OnceTracker::new(0.5, [1u32]);
        assert!(!tracker.report(&99, Intersection::visible(1.0)));
        assert!(!tracker.has_fired(&99));
    }

    #[test]
    fn test_threshold_tolerance() {
        let mut tracker = OnceTracker::new(0.5, [0u8]);
        assert!(tracker.report(&0, Intersection::visible(0.4999999)));
    }

    #[test]
    fn test_fire_all_fallback() {
        let mut tracker = OnceTracker::new(0.15, [1, 2, 3]);
        assert!(tracker.report(&2, Intersection::visible(1.0)));

        let mut fired = tracker.fire_all();
        fired.sort();
        assert_eq!(fired, vec![1, 3]);
        assert!(tracker.is_done());
        assert!(tracker.fire_all().is_empty());
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay_ms(None), 0);
        assert_eq!(parse_delay_ms(Some("200")), 200);
        assert_eq!(parse_delay_ms(Some(" 150.4 ")), 150);
        assert_eq!(parse_delay_ms(Some("-20")), 0);
        assert_eq!(parse_delay_ms(Some("soon")), 0);
    }
}

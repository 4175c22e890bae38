//! Count-up statistic animation

use super::motion::ease_out_quart;

/// Eased count from zero to `target` over a fixed duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value after `elapsed_ms`
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        (self.target as f64 * ease_out_quart(progress)).round() as u64
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Parse a `data-count` value the way `parseInt(value, 10)` reads it.
///
/// Leading whitespace and a `+` sign are skipped and parsing stops at the
/// first non-digit. Negative or digit-less values yield `None`.
pub fn parse_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Format with comma thousands separators (`12500` -> `12,500`)
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_ends_at_target() {
        let counter = CounterAnimation::new(12_500, 2000.0);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(2000.0), 12_500);
        assert_eq!(counter.value_at(5000.0), 12_500);
        assert!(counter.is_complete(2000.0));
        assert!(!counter.is_complete(1999.0));
    }

    #[test]
    fn test_monotonic() {
        let counter = CounterAnimation::new(987, 2000.0);
        let mut previous = 0;
        for frame in 0..=130 {
            let value = counter.value_at(frame as f64 * 16.0);
            assert!(value >= previous, "frame {frame}: {value} < {previous}");
            assert!(value <= 987);
            previous = value;
        }
        assert_eq!(previous, 987);
    }

    #[test]
    fn test_eased_midpoint() {
        let counter = CounterAnimation::new(10_000, 2000.0);
        // ease_out_quart(0.5) = 0.9375
        assert_eq!(counter.value_at(1000.0), 9375);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let counter = CounterAnimation::new(42, 0.0);
        assert_eq!(counter.value_at(0.0), 42);
        assert!(counter.is_complete(0.0));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12500"), Some(12_500));
        assert_eq!(parse_count("  300+"), Some(300));
        assert_eq!(parse_count("+7"), Some(7));
        assert_eq!(parse_count("-5"), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(12_500), "12,500");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }
}

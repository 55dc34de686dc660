use super::easing::Ease;

/// A number that counts up from zero to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    target: f64,
    decimal: bool,
    pub duration_ms: f64,
    ease: Ease,
}

impl Counter {
    pub fn new(target: f64, decimal: bool) -> Self {
        Self {
            target,
            decimal,
            duration_ms: 2000.0,
            ease: Ease::Power2Out,
        }
    }

    /// Reads the target from the element's rendered text. A `.` marks a
    /// decimal counter.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let target = text.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)?;
        Some(Self::new(target, text.contains('.')))
    }

    /// Text to display `t_ms` after the count started.
    pub fn text_at(&self, t_ms: f64) -> String {
        let linear = if self.duration_ms <= 0.0 {
            1.0
        } else {
            t_ms / self.duration_ms
        };
        let value = self.target * self.ease.apply(linear);
        if self.decimal {
            format!("{:.1}", (value * 10.0).round() / 10.0)
        } else {
            format!("{}", value.floor() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_decimal_targets() {
        let rating = Counter::parse("4.9").unwrap();
        assert!(rating.decimal);
        assert_eq!(rating.target, 4.9);

        let users = Counter::parse(" 50000 ").unwrap();
        assert!(!users.decimal);

        assert!(Counter::parse("n/a").is_none());
        assert!(Counter::parse("-3").is_none());
    }

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        let users = Counter::parse("50000").unwrap();
        assert_eq!(users.text_at(0.0), "0");
        assert_eq!(users.text_at(2000.0), "50000");
        assert_eq!(users.text_at(60_000.0), "50000");

        let rating = Counter::parse("4.9").unwrap();
        assert_eq!(rating.text_at(0.0), "0.0");
        assert_eq!(rating.text_at(2000.0), "4.9");
    }

    #[test]
    fn displayed_value_never_decreases() {
        for text in ["95", "4.9", "50000"] {
            let counter = Counter::parse(text).unwrap();
            let mut last = -1.0;
            for step in 0..=200 {
                let shown: f64 = counter.text_at(step as f64 * 10.0).parse().unwrap();
                assert!(shown >= last, "{} went from {} to {}", text, last, shown);
                last = shown;
            }
        }
    }

    #[test]
    fn integer_counters_floor() {
        let counter = Counter::new(95.0, false);
        let shown: u64 = counter.text_at(1000.0).parse().unwrap();
        let exact = 95.0 * Ease::Power2Out.apply(0.5);
        assert_eq!(shown, exact.floor() as u64);
    }
}

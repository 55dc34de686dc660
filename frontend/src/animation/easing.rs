/// Easing curves used by the landing page effects.
///
/// Naming follows the "power"/"back" families most web animation tooling
/// uses: `power2` is the cubic curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    /// Overshoots the target by an amount controlled by the factor, then settles.
    BackOut(f64),
}

impl Ease {
    /// The usual overshoot for `back.out`.
    pub const BACK_OUT: Ease = Ease::BackOut(1.7);

    /// Maps linear progress in `[0, 1]` to eased progress. Input outside the
    /// range is clamped. Both endpoints map exactly onto 0 and 1.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
            Ease::BackOut(s) => {
                let k = t - 1.0;
                1.0 + (s + 1.0) * k * k * k + s * k * k
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power2Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::Power2Out, Ease::Power2InOut, Ease::BACK_OUT];

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        }
    }

    #[test]
    fn back_out_starts_on_its_from_pose() {
        for s in [1.0, 1.7, 2.0, 2.5] {
            assert_eq!(Ease::BackOut(s).apply(0.0), 0.0, "s = {}", s);
            assert_eq!(Ease::BackOut(s).apply(-0.5), 0.0, "s = {}", s);
            assert_eq!(Ease::BackOut(s).apply(1.0), 1.0, "s = {}", s);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn power_curves_are_monotonic() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power2InOut] {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= last, "{:?} decreased at step {}", ease, i);
                last = v;
            }
        }
    }

    #[test]
    fn in_out_is_symmetric_at_midpoint() {
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BACK_OUT.apply(i as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }
}

//! Easing curves for animated alignment
//!
//! Small closed-form curves sampled at normalized time `t in [0, 1]`.
//! Every curve maps 0 -> 0 and 1 -> 1.

/// Named easing curve applied to an animated transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingCurve {
    Linear,
    /// Cubic ease-out: fast start, gentle stop
    EaseOut,
    /// Cubic ease-in-out: gentle at both ends
    #[default]
    EaseInOut,
    /// Quintic ease-out: long deceleration tail
    EaseOutQuint,
}

impl EasingCurve {
    /// Sample the curve at normalized time `t`, clamped to `[0, 1]`
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutQuint => {
                let u = 1.0 - t;
                1.0 - u * u * u * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingCurve; 4] = [
        EasingCurve::Linear,
        EasingCurve::EaseOut,
        EasingCurve::EaseInOut,
        EasingCurve::EaseOutQuint,
    ];

    #[test]
    fn test_endpoints() {
        for curve in ALL {
            assert!((curve.sample(0.0)).abs() < 1e-6, "{curve:?} at 0");
            assert!((curve.sample(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        for curve in ALL {
            assert_eq!(curve.sample(-2.0), curve.sample(0.0));
            assert_eq!(curve.sample(3.0), curve.sample(1.0));
        }
    }

    #[test]
    fn test_monotonic() {
        for curve in ALL {
            let mut last = 0.0f32;
            for i in 0..=100 {
                let v = curve.sample(i as f32 / 100.0);
                assert!(v >= last - 1e-6, "{curve:?} dipped at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Ease-out should cover more than half the distance by t = 0.5.
        assert!(EasingCurve::EaseOut.sample(0.5) > 0.5);
        assert!(EasingCurve::EaseOutQuint.sample(0.5) > EasingCurve::EaseOut.sample(0.5));
    }
}

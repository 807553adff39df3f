/// Easing curves over the normalized `[0, 1]` domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Cubic acceleration for the first half, mirrored deceleration for the second.
    InOutCubic,
}

impl Ease {
    /// Evaluate the curve at `t`. Inputs are not clamped.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

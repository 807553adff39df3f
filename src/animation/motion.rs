//! Dot radius over one normalized animation cycle.
//!
//! Each dot runs the same three-phase curve (grow, shrink, rest) shifted by its own phase
//! delay, which produces the travelling wave around the ring.

use crate::animation::ease::Ease;

/// Length of one animation cycle in normalized time.
pub const CYCLE: f64 = 1.0;
/// Start of the shrink phase. Also the length of the grow and shrink phases.
pub const SHRINK_START: f64 = 0.333;
/// Start of the rest phase.
pub const REST_START: f64 = 0.666;
/// Peak radius, in motion units, reached at the grow/shrink boundary.
pub const MAX_RADIUS: f64 = 2.0;

const PHASE_EASE: Ease = Ease::InOutCubic;

/// Where a dot is within its cycle, with the phase-local progress in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// `[0, SHRINK_START)`: radius eases from 0 up to [`MAX_RADIUS`].
    Grow {
        /// Progress through the grow phase.
        t: f64,
    },
    /// `[SHRINK_START, REST_START)`: radius eases from [`MAX_RADIUS`] back to 0.
    Shrink {
        /// Progress through the shrink phase.
        t: f64,
    },
    /// `[REST_START, CYCLE)`: radius stays at 0.
    Rest,
}

impl Phase {
    /// Classify an adjusted time in `[0, CYCLE)`. Lower bounds are inclusive, so
    /// `SHRINK_START` itself is `Shrink` and `REST_START` itself is `Rest`.
    pub fn at(adjusted: f64) -> Self {
        if adjusted < SHRINK_START {
            Self::Grow {
                t: adjusted / SHRINK_START,
            }
        } else if adjusted < REST_START {
            Self::Shrink {
                t: (adjusted - SHRINK_START) / SHRINK_START,
            }
        } else {
            Self::Rest
        }
    }

    /// Radius for this phase, in motion units.
    pub fn radius(self) -> f64 {
        let r = match self {
            Self::Grow { t } => PHASE_EASE.apply(t) * MAX_RADIUS,
            Self::Shrink { t } => MAX_RADIUS - PHASE_EASE.apply(t) * MAX_RADIUS,
            Self::Rest => 0.0,
        };
        // float error at the shrink/rest edge can dip a hair below zero
        r.clamp(0.0, MAX_RADIUS)
    }
}

/// Shift `time` back by `delay` and wrap into `[0, CYCLE)`.
pub fn adjusted_time(time: f64, delay: f64) -> f64 {
    ((time - delay) % CYCLE + CYCLE) % CYCLE
}

/// Radius in `[0, MAX_RADIUS]` of a dot with phase `delay` at normalized `time`.
///
/// Periodic in `time` with period [`CYCLE`]. Non-finite inputs yield 0.
pub fn radius(time: f64, delay: f64) -> f64 {
    let adjusted = adjusted_time(time, delay);
    if !adjusted.is_finite() {
        return 0.0;
    }
    Phase::at(adjusted).radius()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;

use crate::{
    animation::motion,
    composition::model::{Dot, MIN_VISIBLE_RADIUS, SpinnerSpec},
    foundation::{
        core::{FrameCount, FrameIndex, Point},
        error::{BubbleError, BubbleResult},
    },
};

/// What is visible in one frame, in pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Index this frame was sampled for.
    pub frame: FrameIndex,
    /// Normalized sample time, `0..1`.
    pub time: f64,
    /// Edge length of the square target canvas.
    pub canvas_size: u32,
    /// Dots above the visibility cutoff, in ring order.
    pub dots: Vec<EvaluatedDot>,
}

/// A visible dot of an [`EvaluatedFrame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedDot {
    /// Position of the dot in [`Dot::RING`].
    pub slot: usize,
    /// Center in canvas pixels.
    pub center: Point,
    /// Radius in motion units, `0..=MAX_RADIUS`.
    pub radius: f64,
    /// Radius in canvas pixels.
    pub radius_px: f64,
}

/// Samples the motion model for one frame and lays the visible dots out on the canvas.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `frame` of a cycle split into `count` frames.
    ///
    /// Fails if `spec` is invalid or `frame` is not below `count`.
    #[tracing::instrument(skip(spec))]
    pub fn eval_frame(
        spec: &SpinnerSpec,
        frame: FrameIndex,
        count: FrameCount,
    ) -> BubbleResult<EvaluatedFrame> {
        spec.validate()?;
        if !count.contains(frame) {
            return Err(BubbleError::evaluation(format!(
                "frame {} is out of bounds for {} frames",
                frame.0,
                count.get()
            )));
        }

        let time = count.sample_time(frame);
        let dots = Dot::RING
            .iter()
            .enumerate()
            .filter_map(|(slot, dot)| eval_dot(spec, slot, dot, time))
            .collect();

        Ok(EvaluatedFrame {
            frame,
            time,
            canvas_size: spec.canvas_size,
            dots,
        })
    }
}

fn eval_dot(spec: &SpinnerSpec, slot: usize, dot: &Dot, time: f64) -> Option<EvaluatedDot> {
    let radius = motion::radius(time, dot.delay);
    if radius <= MIN_VISIBLE_RADIUS {
        return None;
    }
    Some(EvaluatedDot {
        slot,
        center: spec.dot_center(dot),
        radius,
        radius_px: radius * spec.px_per_radius_unit(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/eval.rs"]
mod tests;

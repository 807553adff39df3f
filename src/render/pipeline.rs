use crate::{
    composition::model::SpinnerSpec,
    encode::png::encode_png,
    eval::Evaluator,
    foundation::{
        core::{FrameCount, FrameIndex},
        error::BubbleResult,
    },
    render::{RenderBackend, cpu::CpuBackend},
};

/// One encoded frame of the spinner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based position in the cycle.
    pub index: FrameIndex,
    /// Standalone PNG file contents.
    pub png: Vec<u8>,
}

impl Frame {
    /// `bubble-loading-frame-NN.png`, with `NN` the 1-based index padded to two digits.
    pub fn file_name(&self) -> String {
        frame_file_name(self.index)
    }
}

/// File name used when persisting the frame at `index`.
pub fn frame_file_name(index: FrameIndex) -> String {
    format!("bubble-loading-frame-{:02}.png", index.ordinal())
}

/// Render and encode a single frame on the CPU backend.
pub fn render_frame(
    spec: &SpinnerSpec,
    frame: FrameIndex,
    count: FrameCount,
) -> BubbleResult<Frame> {
    let mut backend = CpuBackend::new();
    render_one(&mut backend, spec, frame, count)
}

/// Render and encode every frame of one cycle on the CPU backend.
pub fn render_frames(spec: &SpinnerSpec, count: FrameCount) -> BubbleResult<Vec<Frame>> {
    let mut backend = CpuBackend::new();
    render_frames_with(&mut backend, spec, count)
}

/// Render and encode every frame of one cycle, strictly in index order.
///
/// The first failing frame aborts the whole call; no partial list is returned.
#[tracing::instrument(skip(backend, spec), fields(canvas_size = spec.canvas_size))]
pub fn render_frames_with(
    backend: &mut dyn RenderBackend,
    spec: &SpinnerSpec,
    count: FrameCount,
) -> BubbleResult<Vec<Frame>> {
    spec.validate()?;

    let mut frames = Vec::with_capacity(usize::try_from(count.get()).unwrap_or(0));
    for idx in count.indices() {
        frames.push(render_one(backend, spec, idx, count)?);
    }
    tracing::debug!(frames = frames.len(), "render complete");
    Ok(frames)
}

fn render_one(
    backend: &mut dyn RenderBackend,
    spec: &SpinnerSpec,
    frame: FrameIndex,
    count: FrameCount,
) -> BubbleResult<Frame> {
    let evaluated = Evaluator::eval_frame(spec, frame, count)?;
    let rgba = backend.render_frame(&evaluated)?;
    let png = encode_png(&rgba)?;
    tracing::debug!(
        frame = frame.0,
        time = evaluated.time,
        dots = evaluated.dots.len(),
        bytes = png.len(),
        "frame encoded"
    );
    Ok(Frame { index: frame, png })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

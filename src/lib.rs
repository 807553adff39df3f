//! Frame-by-frame export of the eight-dot "bubble loading" spinner.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate**: `SpinnerSpec + FrameIndex -> EvaluatedFrame` (which dots are visible, where, how big)
//! 2. **Render**: `EvaluatedFrame -> FrameRGBA` (CPU backend, premultiplied RGBA8)
//! 3. **Encode**: `FrameRGBA -> PNG bytes`, in memory
//!
//! [`render_frames`] runs all three for every frame of one cycle, in order. Writing the
//! PNGs anywhere is left to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod encode;
mod eval;
mod foundation;
mod render;

pub use animation::ease::Ease;
pub use animation::motion::{
    CYCLE, MAX_RADIUS, Phase, REST_START, SHRINK_START, adjusted_time, radius,
};
pub use composition::model::{
    DEFAULT_CANVAS_SIZE, Dot, MIN_VISIBLE_RADIUS, RADIUS_DIVISOR, RING_FRACTION, SpinnerSpec,
};
pub use encode::png::encode_png;
pub use eval::{EvaluatedDot, EvaluatedFrame, Evaluator};
pub use foundation::core::{FrameCount, FrameIndex, Point, Rgba8Premul};
pub use foundation::error::{BubbleError, BubbleResult};
pub use render::cpu::CpuBackend;
pub use render::pipeline::{
    Frame, frame_file_name, render_frame, render_frames, render_frames_with,
};
pub use render::{FrameRGBA, RenderBackend};

pub mod cpu;
pub mod pipeline;

use crate::{eval::EvaluatedFrame, foundation::error::BubbleResult};

/// A rendered frame as row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are already multiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns an evaluated frame into pixels.
///
/// Implementations may keep a surface alive between calls but every call must start
/// from a transparent canvas.
pub trait RenderBackend {
    /// Rasterize the visible dots of `frame`.
    fn render_frame(&mut self, frame: &EvaluatedFrame) -> BubbleResult<FrameRGBA>;
}

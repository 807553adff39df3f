use kurbo::Shape as _;

use crate::{
    eval::{EvaluatedDot, EvaluatedFrame},
    foundation::{
        core::{BezPath, Circle, Rgba8Premul},
        error::{BubbleError, BubbleResult},
    },
    render::{FrameRGBA, RenderBackend},
};

/// Flattening tolerance, in pixels, for circle outlines.
const CIRCLE_TOLERANCE: f64 = 0.05;

/// Anti-aliased CPU rasterizer backed by a single reusable pixmap.
pub struct CpuBackend {
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// Backend with no surface yet; one is allocated on first render.
    pub fn new() -> Self {
        Self { surface: None }
    }

    fn ensure_surface(&mut self, size: u32) -> BubbleResult<&mut CpuSurface> {
        let side: u16 = size
            .try_into()
            .map_err(|_| BubbleError::render("canvas size exceeds u16"))?;
        if side == 0 {
            return Err(BubbleError::render("canvas size must be > 0"));
        }

        let stale = self
            .surface
            .as_ref()
            .is_none_or(|s| s.width != side || s.height != side);
        if stale {
            tracing::debug!(size, "allocating cpu surface");
            self.surface = Some(CpuSurface {
                width: side,
                height: side,
                pixmap: vello_cpu::Pixmap::new(side, side),
            });
        }
        self.surface
            .as_mut()
            .ok_or_else(|| BubbleError::render("cpu surface missing"))
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for CpuBackend {
    fn render_frame(&mut self, frame: &EvaluatedFrame) -> BubbleResult<FrameRGBA> {
        let surface = self.ensure_surface(frame.canvas_size)?;
        clear_pixmap(&mut surface.pixmap, Rgba8Premul::transparent());

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        let white = Rgba8Premul::white();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            white.r, white.g, white.b, white.a,
        ));
        for dot in &frame.dots {
            ctx.fill_path(&bezpath_to_cpu(&dot_path(dot)));
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        Ok(FrameRGBA {
            width: u32::from(surface.width),
            height: u32::from(surface.height),
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn dot_path(dot: &EvaluatedDot) -> BezPath {
    Circle::new(dot.center, dot.radius_px).to_path(CIRCLE_TOLERANCE)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, color: Rgba8Premul) {
    let rgba = color.to_array();
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

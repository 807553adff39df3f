use crate::foundation::{
    core::Point,
    error::{BubbleError, BubbleResult},
};

/// Canvas edge length, in pixels, of the reference spinner.
pub const DEFAULT_CANVAS_SIZE: u32 = 480;
/// Distance of dot centers from the canvas center, as a fraction of half the canvas.
pub const RING_FRACTION: f64 = 0.83;
/// Canvas size divided by this gives the pixel length of one motion unit of radius.
pub const RADIUS_DIVISOR: f64 = 24.0;
/// Dots whose motion radius is at or below this are not drawn.
pub const MIN_VISIBLE_RADIUS: f64 = 0.1;

/// One dot of the ring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dot {
    /// Clockwise from 12 o'clock, in degrees.
    pub angle_deg: f64,
    /// Fraction of the cycle this dot lags behind dot 0.
    pub delay: f64,
}

impl Dot {
    /// The eight dots, 45 degrees apart, each one eighth of a cycle behind the previous.
    pub const RING: [Dot; 8] = [
        Dot::new(0.0, 0.0),
        Dot::new(45.0, 0.125),
        Dot::new(90.0, 0.25),
        Dot::new(135.0, 0.375),
        Dot::new(180.0, 0.5),
        Dot::new(225.0, 0.625),
        Dot::new(270.0, 0.75),
        Dot::new(315.0, 0.875),
    ];

    const fn new(angle_deg: f64, delay: f64) -> Self {
        Self { angle_deg, delay }
    }
}

/// Geometry of the rendered spinner. Everything scales from `canvas_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerSpec {
    /// Width and height of the square canvas, in pixels.
    pub canvas_size: u32,
}

impl Default for SpinnerSpec {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl SpinnerSpec {
    /// Spec with a custom canvas size.
    pub fn with_canvas_size(canvas_size: u32) -> Self {
        Self { canvas_size }
    }

    /// Parse a spec from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BubbleResult<Self> {
        let spec: Self =
            serde_json::from_str(s).map_err(|e| BubbleError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check the canvas fits the raster backend.
    pub fn validate(&self) -> BubbleResult<()> {
        if self.canvas_size == 0 {
            return Err(BubbleError::validation("canvas_size must be > 0"));
        }
        if self.canvas_size > u32::from(u16::MAX) {
            return Err(BubbleError::validation(format!(
                "canvas_size must be <= {}",
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Center of the canvas.
    pub fn center(&self) -> Point {
        let half = f64::from(self.canvas_size) / 2.0;
        Point::new(half, half)
    }

    /// Distance from the canvas center to every dot center.
    pub fn ring_radius(&self) -> f64 {
        f64::from(self.canvas_size) / 2.0 * RING_FRACTION
    }

    /// Pixels per motion unit of dot radius.
    pub fn px_per_radius_unit(&self) -> f64 {
        f64::from(self.canvas_size) / RADIUS_DIVISOR
    }

    /// Pixel-space center of `dot`.
    pub fn dot_center(&self, dot: &Dot) -> Point {
        let theta = dot.angle_deg.to_radians();
        let c = self.center();
        let d = self.ring_radius();
        Point::new(c.x + d * theta.sin(), c.y - d * theta.cos())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;

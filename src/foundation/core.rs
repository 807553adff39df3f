use crate::foundation::error::{BubbleError, BubbleResult};

pub use kurbo::{BezPath, Circle, Point};

/// Zero-based frame index within one rendered cycle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// One-based ordinal used for user-facing names.
    pub fn ordinal(self) -> u64 {
        self.0.saturating_add(1)
    }
}

/// Number of frames sampled over one animation cycle. Always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct FrameCount(u64);

impl FrameCount {
    /// Count used when the caller's input cannot be interpreted.
    pub const DEFAULT: Self = Self(8);

    /// Build a count, rejecting zero.
    pub fn new(n: u64) -> BubbleResult<Self> {
        if n == 0 {
            return Err(BubbleError::validation("frame count must be >= 1"));
        }
        Ok(Self(n))
    }

    /// Parse user text the way a numeric form field does: an optional sign followed by a
    /// leading run of digits, anything after the digits ignored. `None` when that yields no
    /// positive count.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if negative || digits_len == 0 {
            return None;
        }
        rest[..digits_len]
            .parse::<u64>()
            .ok()
            .and_then(|n| Self::new(n).ok())
    }

    /// [`FrameCount::parse`], falling back to [`FrameCount::DEFAULT`].
    pub fn parse_lenient(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::DEFAULT)
    }

    /// Raw count.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether `index` addresses a frame of this count.
    pub fn contains(self, index: FrameIndex) -> bool {
        index.0 < self.0
    }

    /// All frame indices in order.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }

    /// Normalized sample time in `[0, 1)` for `index`.
    pub fn sample_time(self, index: FrameIndex) -> f64 {
        index.0 as f64 / self.0 as f64
    }
}

impl Default for FrameCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for FrameCount {
    type Error = BubbleError;

    fn try_from(n: u64) -> BubbleResult<Self> {
        Self::new(n)
    }
}

impl From<FrameCount> for u64 {
    fn from(c: FrameCount) -> u64 {
        c.0
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Coverage; 0 is fully transparent.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque white, the dot fill.
    pub fn white() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Byte layout as stored in raster buffers.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

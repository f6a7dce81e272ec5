use crate::foundation::error::{GlassError, GlassResult};

/// Pixel-density multiplier applied when capturing a card snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// Standard resolution.
    X1,
    /// High quality / retina.
    #[default]
    X2,
    /// Ultra HD.
    X3,
    /// Maximum detail.
    X4,
}

impl Resolution {
    /// Integer multiplier applied to both canvas dimensions.
    pub fn multiplier(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X3 => 3,
            Self::X4 => 4,
        }
    }

    /// Parse a discrete multiplier (1–4).
    pub fn from_multiplier(m: u32) -> GlassResult<Self> {
        match m {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            3 => Ok(Self::X3),
            4 => Ok(Self::X4),
            other => Err(GlassError::validation(format!(
                "resolution multiplier must be 1..=4, got {other}"
            ))),
        }
    }
}

/// User-facing batch span: 1-based, inclusive on both ends.
///
/// A range is not trusted as-is; [`BatchRange::resolve`] clamps both bounds
/// into `[1, total]` and collapses an inverted span down to its end index
/// rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchRange {
    /// First 1-based index to process (inclusive).
    pub start: u32,
    /// Last 1-based index to process (inclusive).
    pub end: u32,
}

impl BatchRange {
    /// Build a range without clamping; bounds are resolved at generation time.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The full span `[1, total]`, or `[1, 1]` when nothing is loaded.
    ///
    /// Recomputed by callers whenever the total item count changes.
    pub fn default_for(total: usize) -> Self {
        if total > 0 {
            Self {
                start: 1,
                end: total as u32,
            }
        } else {
            Self { start: 1, end: 1 }
        }
    }

    /// Clamp both bounds into `[1, total]` and collapse `start > end` to a
    /// single-item span at `end`.
    ///
    /// Returns `None` when `total` is zero (nothing to iterate).
    pub fn resolve(self, total: usize) -> Option<ResolvedRange> {
        if total == 0 {
            return None;
        }
        let total = total as u32;
        let mut start = self.start.clamp(1, total);
        let end = self.end.clamp(1, total);
        if start > end {
            start = end;
        }
        Some(ResolvedRange { start, end })
    }
}

/// A batch span with both bounds clamped and ordered, still 1-based inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRange {
    /// First 1-based index (inclusive), `>= 1`.
    pub start: u32,
    /// Last 1-based index (inclusive), `>= start`.
    pub end: u32,
}

impl ResolvedRange {
    /// Number of items covered by the span; always at least one.
    pub fn count(self) -> u32 {
        self.end - self.start + 1
    }

    /// Iterate the covered positions as 0-based sequence indices.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).map(|p| (p - 1) as usize)
    }
}

/// A rasterized frame in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, 4 per pixel.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

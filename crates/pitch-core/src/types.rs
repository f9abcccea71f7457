// File: crates/pitch-core/src/types.rs
// Summary: Shared types and constants (logical surface, paddings, normalized points).

use crate::error::ChartError;

/// Default logical surface width.
pub const VIEW_WIDTH: f32 = 300.0;
/// Default logical surface height.
pub const VIEW_HEIGHT: f32 = 100.0;

/// Logical drawing surface every chart normalizes into.
/// Contract: `pad_x * 2 < width` and `pad_y * 2 < height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub width: f32,
    pub height: f32,
    pub pad_x: f32,
    pub pad_y: f32,
}

impl ViewBox {
    /// Try to construct a view box enforcing the padding invariant.
    pub fn try_new(width: f32, height: f32, pad_x: f32, pad_y: f32) -> Result<Self, ChartError> {
        if !(width.is_finite() && height.is_finite() && pad_x.is_finite() && pad_y.is_finite()) {
            return Err(ChartError::InvalidViewBox("non-finite dimension"));
        }
        if width <= 0.0 || height <= 0.0 || pad_x < 0.0 || pad_y < 0.0 {
            return Err(ChartError::InvalidViewBox("non-positive surface"));
        }
        if pad_x * 2.0 >= width {
            return Err(ChartError::InvalidViewBox("horizontal padding consumes surface"));
        }
        if pad_y * 2.0 >= height {
            return Err(ChartError::InvalidViewBox("vertical padding consumes surface"));
        }
        Ok(Self { width, height, pad_x, pad_y })
    }

    /// Drawable width between the horizontal paddings.
    #[inline]
    pub fn usable_width(&self) -> f32 {
        self.width - self.pad_x * 2.0
    }

    /// Drawable height between the vertical paddings.
    #[inline]
    pub fn usable_height(&self) -> f32 {
        self.height - self.pad_y * 2.0
    }

    /// Clamp a point into the padded drawable region.
    #[inline]
    pub fn clamp(&self, p: NormalizedPoint) -> NormalizedPoint {
        NormalizedPoint {
            x: clampf(p.x, self.pad_x, self.width - self.pad_x),
            y: clampf(p.y, self.pad_y, self.height - self.pad_y),
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self { width: VIEW_WIDTH, height: VIEW_HEIGHT, pad_x: 8.0, pad_y: 8.0 }
    }
}

/// A point in ViewBox coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn clampf(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo { lo } else if v > hi { hi } else { v }
}

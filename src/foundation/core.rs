use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Output raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Portrait 4:5, the shape social feeds crop least.
    pub const PORTRAIT_4X5: Canvas = Canvas {
        width: 1080,
        height: 1350,
    };

    pub fn validate(self) -> SlidecastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SlidecastError::render("canvas width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            // yuv420p output needs even dimensions.
            return Err(SlidecastError::render(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::PORTRAIT_4X5
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

//! Assembling rasterized slides into a video.

pub mod concat;
pub mod ffmpeg;
pub mod progress;

use crate::{foundation::error::SlidecastResult, render::raster::SceneImageAsset};

/// Turns ordered slide images into one playable video stream.
///
/// `progress` receives ratios in `[0, 1]` that never decrease.
pub trait VideoAssembler {
    fn assemble(
        &self,
        assets: &[SceneImageAsset],
        seconds_per_slide: f64,
        progress: &mut dyn FnMut(f64),
    ) -> SlidecastResult<Vec<u8>>;
}

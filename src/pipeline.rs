//! Plan → slides → video.

use tracing::info;

use crate::{
    encode::{VideoAssembler, ffmpeg::DEFAULT_FPS, progress::ProgressTracker},
    foundation::{
        core::Canvas,
        error::{SlidecastError, SlidecastResult},
    },
    plan::model::{Pacing, VideoPlan},
    render::raster::{SceneImageAsset, SceneRasterizer, render_scenes},
};

const RASTER_STARTED: f64 = 0.05;
const RASTER_DONE: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub canvas: Canvas,
    pub fps: u32,
    /// Overrides the pacing-derived slide duration.
    pub seconds_per_slide: Option<f64>,
    pub overwrite: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: DEFAULT_FPS,
            seconds_per_slide: None,
            overwrite: true,
        }
    }
}

impl RenderSettings {
    pub fn seconds_for(&self, pacing: Pacing) -> f64 {
        self.seconds_per_slide
            .unwrap_or_else(|| pacing.seconds_per_scene())
    }
}

#[derive(Clone, Debug)]
pub struct RenderedVideo {
    pub assets: Vec<SceneImageAsset>,
    pub mp4: Vec<u8>,
}

/// Rasterize every scene, then hand the slides to the assembler.
///
/// Progress: 0.05 on start, 0.4 once slides exist, `0.4 + 0.6 × r` while assembling, 1.0 at
/// the end.
#[tracing::instrument(skip_all, fields(scenes = plan.scenes.len(), seconds_per_slide = seconds_per_slide))]
pub fn render_video(
    plan: &VideoPlan,
    seconds_per_slide: f64,
    rasterizer: &dyn SceneRasterizer,
    assembler: &dyn VideoAssembler,
    progress: &mut dyn FnMut(f64),
) -> SlidecastResult<RenderedVideo> {
    if plan.scenes.is_empty() {
        return Err(SlidecastError::render("plan has no scenes to render"));
    }

    let mut tracker = ProgressTracker::new(progress);
    tracker.report(RASTER_STARTED);

    let assets = render_scenes(rasterizer, &plan.scenes)?;
    info!(slides = assets.len(), "slides rasterized");
    tracker.report(RASTER_DONE);

    let mp4 = assembler.assemble(&assets, seconds_per_slide, &mut |r| {
        tracker.report(RASTER_DONE + r.clamp(0.0, 1.0) * (1.0 - RASTER_DONE));
    })?;
    tracker.finish();

    info!(
        bytes = mp4.len(),
        runtime_secs = plan.estimated_runtime_secs(seconds_per_slide),
        "video ready"
    );
    Ok(RenderedVideo { assets, mp4 })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;

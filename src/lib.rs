//! Slidecast turns a few viewer preferences (topic, tone, pacing, duration) into a short
//! slideshow video plan, and optionally renders that plan to PNG slides and an MP4.
//!
//! - Generate a [`VideoPlan`] with [`PlanGenerator`] (or [`generate_plan`])
//! - Rasterize scenes with a [`SceneRasterizer`] such as [`SvgRasterizer`]
//! - Assemble slides with a [`VideoAssembler`] such as [`FfmpegAssembler`], or run both via
//!   [`render_video`]
#![forbid(unsafe_code)]

mod foundation;

/// Slide-to-video assembly.
pub mod encode;
/// The pure plan generator and its data model.
pub mod plan;
/// End-to-end rendering.
pub mod pipeline;
/// Scene rasterization.
pub mod render;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::Canvas;
pub use crate::foundation::error::{SlidecastError, SlidecastResult};

pub use crate::encode::VideoAssembler;
pub use crate::encode::concat::ConcatScript;
pub use crate::encode::ffmpeg::{FfmpegAssembler, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::progress::ProgressTracker;
pub use crate::pipeline::{RenderSettings, RenderedVideo, render_video};
pub use crate::plan::generator::{PlanGenerator, generate_plan};
pub use crate::plan::model::{
    ColorPalette, Duration, Pacing, ScenePlan, Tone, VideoPlan, VideoPreferences,
};
pub use crate::plan::picker::{Picker, RngPicker, ScriptedPicker, SeededPicker, ThreadPicker};
pub use crate::render::raster::{SceneImageAsset, SceneRasterizer, SvgRasterizer, render_scenes};

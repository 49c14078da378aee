use std::{io::Cursor, path::Path, sync::Arc};

use tracing::{debug, warn};

use crate::{
    foundation::{
        core::Canvas,
        error::{SlidecastError, SlidecastResult},
    },
    plan::model::ScenePlan,
    render::svg::scene_svg,
};

/// One rasterized slide, keyed by the scene it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneImageAsset {
    pub id: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Turns one scene into one raster image.
pub trait SceneRasterizer {
    fn render_scene(&self, index: usize, scene: &ScenePlan) -> SlidecastResult<SceneImageAsset>;
}

/// `slide_00.png`, `slide_01.png`, ...
pub fn slide_filename(index: usize) -> String {
    format!("slide_{index:02}.png")
}

/// Rasterize every scene, preserving scene order.
pub fn render_scenes(
    rasterizer: &dyn SceneRasterizer,
    scenes: &[ScenePlan],
) -> SlidecastResult<Vec<SceneImageAsset>> {
    scenes
        .iter()
        .enumerate()
        .map(|(index, scene)| rasterizer.render_scene(index, scene))
        .collect()
}

/// Lays slides out as SVG and rasterizes them with `resvg`.
#[derive(Clone)]
pub struct SvgRasterizer {
    canvas: Canvas,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("canvas", &self.canvas)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl SvgRasterizer {
    /// Rasterizer using system fonts only.
    pub fn new(canvas: Canvas) -> SlidecastResult<Self> {
        Self::build(canvas, None)
    }

    /// Rasterizer using system fonts plus any `.ttf`/`.otf`/`.ttc` files in `fonts_dir`.
    pub fn with_fonts_dir(canvas: Canvas, fonts_dir: &Path) -> SlidecastResult<Self> {
        Self::build(canvas, Some(fonts_dir))
    }

    fn build(canvas: Canvas, fonts_dir: Option<&Path>) -> SlidecastResult<Self> {
        canvas.validate()?;

        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = fonts_dir {
            load_fonts_from_dir(&mut db, dir);
        }
        if db.is_empty() {
            warn!("no fonts found; slide text will not be drawn");
        }
        debug!(faces = db.len(), "font database ready");

        Ok(Self {
            canvas,
            fontdb: Arc::new(db),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn font_face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `svg` to straight-alpha RGBA8.
    fn rasterize(&self, svg: &str) -> SlidecastResult<Vec<u8>> {
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| SlidecastError::render(format!("parse slide svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.canvas.width, self.canvas.height)
            .ok_or_else(|| SlidecastError::render("failed to allocate slide pixmap"))?;

        let sx = self.canvas.width as f32 / tree.size().width();
        let sy = self.canvas.height as f32 / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        unpremultiply_rgba8_in_place(&mut rgba);
        Ok(rgba)
    }
}

impl SceneRasterizer for SvgRasterizer {
    fn render_scene(&self, index: usize, scene: &ScenePlan) -> SlidecastResult<SceneImageAsset> {
        let svg = scene_svg(scene, self.canvas)?;
        let rgba = self.rasterize(&svg)?;
        let png = encode_png(self.canvas, rgba)?;

        debug!(index, id = %scene.id, bytes = png.len(), "rasterized slide");
        Ok(SceneImageAsset {
            id: scene.id.clone(),
            filename: slide_filename(index),
            width: self.canvas.width,
            height: self.canvas.height,
            png,
        })
    }
}

fn encode_png(canvas: Canvas, rgba: Vec<u8>) -> SlidecastResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(canvas.width, canvas.height, rgba)
        .ok_or_else(|| SlidecastError::render("slide buffer does not match canvas size"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| SlidecastError::render(format!("encode slide png: {e}")))?;
    Ok(png)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        warn!(dir = %dir.display(), "fonts directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;

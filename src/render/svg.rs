//! Slide layout as an SVG document.
//!
//! Coordinates live in a fixed 1080x1350 design space (`viewBox`); the rasterizer scales the
//! document to the target canvas.

use std::fmt::Write as _;

use crate::{
    foundation::{
        color::Rgb8,
        core::Canvas,
        error::{SlidecastError, SlidecastResult},
    },
    plan::model::ScenePlan,
};

pub const DESIGN_WIDTH: f32 = 1080.0;
pub const DESIGN_HEIGHT: f32 = 1350.0;

const MARGIN_X: f32 = 120.0;
const TEXT_WIDTH: f32 = DESIGN_WIDTH - 2.0 * MARGIN_X;

const FONT_FAMILY: &str = "'DejaVu Sans', 'Liberation Sans', 'Noto Sans', 'Segoe UI', Arial, sans-serif";

/// Typography for one text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
    pub weight: u16,
    pub italic: bool,
}

impl TextStyle {
    const fn new(size: f32, line_height: f32, weight: u16) -> Self {
        Self {
            size,
            line_height,
            weight,
            italic: false,
        }
    }

    /// Estimated advance of `text`; heavier weights run wider.
    pub fn estimate_width(&self, text: &str) -> f32 {
        let per_char = if self.weight >= 600 { 0.56 } else { 0.52 };
        text.chars().count() as f32 * self.size * per_char
    }
}

pub const TITLE: TextStyle = TextStyle::new(64.0, 70.0, 700);
pub const MAIN: TextStyle = TextStyle::new(58.0, 66.0, 600);
pub const SUBTITLE: TextStyle = TextStyle::new(44.0, 54.0, 400);
pub const TIP: TextStyle = TextStyle {
    italic: true,
    ..TextStyle::new(38.0, 50.0, 400)
};
pub const VOICE_OVER: TextStyle = TextStyle::new(40.0, 48.0, 500);

const BUBBLE_HEIGHT: f32 = 120.0;
const BUBBLE_RADIUS: f32 = 26.0;
const BUBBLE_PADDING: f32 = 28.0;

/// Greedy word wrap: a word that would overflow starts a new line unless it is the first word.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for (n, word) in text.split_whitespace().enumerate() {
        let candidate = if line.is_empty() {
            word.to_owned()
        } else {
            format!("{line} {word}")
        };
        if n > 0 && !line.is_empty() && style.estimate_width(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_owned()));
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Minimal XML text/attribute escaping.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct Inks {
    start: String,
    end: String,
    accent: String,
    text: String,
    subtitle: String,
}

impl Inks {
    fn from_scene(scene: &ScenePlan) -> SlidecastResult<Self> {
        let parse = |role: &str, value: &str| {
            Rgb8::parse_hex(value).map(Rgb8::to_hex).map_err(|e| {
                SlidecastError::render(format!("scene '{}' palette {role}: {e}", scene.id))
            })
        };
        let p = &scene.palette;
        Ok(Self {
            start: parse("start", &p.start)?,
            end: parse("end", &p.end)?,
            accent: parse("accent", &p.accent)?,
            text: parse("text", &p.text)?,
            subtitle: parse("subtitle", &p.subtitle)?,
        })
    }
}

/// Where a wrapped block goes: left edge, top of the first line, wrap width.
#[derive(Clone, Copy, Debug)]
struct TextFrame {
    x: f32,
    top: f32,
    max_width: f32,
}

impl TextFrame {
    fn column(top: f32) -> Self {
        Self {
            x: MARGIN_X,
            top,
            max_width: TEXT_WIDTH,
        }
    }
}

/// Write a wrapped block and return the y just below it.
fn push_block(out: &mut String, text: &str, style: &TextStyle, frame: TextFrame, ink: (&str, f32)) -> f32 {
    let (fill, opacity) = ink;
    let x = frame.x;
    let mut y = frame.top;
    for line in wrap_text(text, style, frame.max_width) {
        // SVG places text on its baseline; ascent is roughly 0.8em.
        let baseline = y + style.size * 0.8;
        let _ = writeln!(
            out,
            r#"  <text x="{x}" y="{baseline:.1}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}" font-style="{}" fill="{fill}" fill-opacity="{opacity}">{}</text>"#,
            style.size,
            style.weight,
            if style.italic { "italic" } else { "normal" },
            escape_xml(&line),
        );
        y += style.line_height;
    }
    y
}

/// Build the slide document for one scene.
pub fn scene_svg(scene: &ScenePlan, canvas: Canvas) -> SlidecastResult<String> {
    canvas.validate()?;
    let inks = Inks::from_scene(scene)?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {DESIGN_WIDTH} {DESIGN_HEIGHT}">"#,
        canvas.width, canvas.height,
    );
    let _ = writeln!(
        out,
        r#"  <defs><linearGradient id="bg" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{DESIGN_WIDTH}" y2="{DESIGN_HEIGHT}"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
        inks.start, inks.end,
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{DESIGN_WIDTH}" height="{DESIGN_HEIGHT}" fill="url(#bg)"/>"#
    );

    // Accent ellipse, tilted 0.2 rad.
    let (cx, cy) = (DESIGN_WIDTH * 0.55, DESIGN_HEIGHT * 0.25);
    let _ = writeln!(
        out,
        r#"  <ellipse cx="{cx}" cy="{cy}" rx="280" ry="140" transform="rotate({:.3} {cx} {cy})" fill="{}" fill-opacity="0.2"/>"#,
        0.2f32.to_degrees(),
        inks.accent,
    );

    let title_end = push_block(&mut out, &scene.title, &TITLE, TextFrame::column(120.0), (&inks.text, 1.0));
    let body_end = push_block(
        &mut out,
        &scene.main_text,
        &MAIN,
        TextFrame::column(title_end + 40.0),
        (&inks.text, 1.0),
    );
    let subtitle_end = push_block(
        &mut out,
        &scene.subtitle,
        &SUBTITLE,
        TextFrame::column(body_end + 30.0),
        (&inks.subtitle, 1.0),
    );
    push_block(
        &mut out,
        &scene.tip,
        &TIP,
        TextFrame::column((subtitle_end + 40.0).max(DESIGN_HEIGHT - 260.0)),
        (&inks.text, 0.8),
    );

    let bubble_y = DESIGN_HEIGHT - 210.0;
    let _ = writeln!(
        out,
        r#"  <rect x="{MARGIN_X}" y="{bubble_y}" width="{TEXT_WIDTH}" height="{BUBBLE_HEIGHT}" rx="{BUBBLE_RADIUS}" ry="{BUBBLE_RADIUS}" fill="{}" fill-opacity="0.12"/>"#,
        inks.accent,
    );
    push_block(
        &mut out,
        &scene.voice_over,
        &VOICE_OVER,
        TextFrame {
            x: MARGIN_X + BUBBLE_PADDING,
            top: bubble_y + 24.0,
            max_width: TEXT_WIDTH - 2.0 * BUBBLE_PADDING,
        },
        (&inks.text, 1.0),
    );

    out.push_str("</svg>\n");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

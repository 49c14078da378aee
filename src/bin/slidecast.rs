use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slidecast::{
    Duration, FfmpegAssembler, Pacing, PlanGenerator, RenderSettings, SceneRasterizer as _,
    SeededPicker, SvgRasterizer, ThreadPicker, Tone, VideoPlan, VideoPreferences,
};

const DEFAULT_VIDEO_OUT: &str = "golden-stories-video.mp4";

#[derive(Parser, Debug)]
#[command(name = "slidecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a video plan and print it.
    Plan(PlanArgs),
    /// Generate a plan and write one PNG per scene.
    Frames(FramesArgs),
    /// Generate a plan and assemble an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct PrefsArgs {
    /// Preferences JSON (`topic`, `tone`, `pacing`, `duration`, `callToAction`, `personalNote`).
    #[arg(
        long = "in",
        conflicts_with_all = ["topic", "tone", "pacing", "duration", "call_to_action", "personal_note"]
    )]
    in_path: Option<PathBuf>,

    #[arg(long, required_unless_present = "in_path")]
    topic: Option<String>,

    #[arg(long, default_value_t = Tone::Heartwarming)]
    tone: Tone,

    #[arg(long, default_value_t = Pacing::Gentle)]
    pacing: Pacing,

    #[arg(long, default_value_t = Duration::Standard)]
    duration: Duration,

    #[arg(long)]
    call_to_action: Option<String>,

    #[arg(long)]
    personal_note: Option<String>,

    /// Make every random choice reproducible.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlanFormat {
    Json,
    Text,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    prefs: PrefsArgs,

    #[arg(long, value_enum, default_value_t = PlanFormat::Json)]
    format: PlanFormat,

    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    prefs: PrefsArgs,

    #[arg(long)]
    out_dir: PathBuf,

    /// Extra `.ttf`/`.otf`/`.ttc` fonts on top of the system ones.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    prefs: PrefsArgs,

    #[arg(long, default_value = DEFAULT_VIDEO_OUT)]
    out: PathBuf,

    /// Override the pacing-derived slide duration.
    #[arg(long)]
    seconds_per_slide: Option<f64>,

    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
    }
}

impl PrefsArgs {
    fn preferences(&self) -> anyhow::Result<VideoPreferences> {
        if let Some(path) = &self.in_path {
            return Ok(VideoPreferences::from_path(path)?);
        }

        let topic = self.topic.clone().context("--topic is required without --in")?;
        let mut prefs = VideoPreferences::new(topic, self.tone, self.pacing, self.duration);
        prefs.call_to_action = self.call_to_action.clone();
        prefs.personal_note = self.personal_note.clone();
        prefs.validate()?;
        Ok(prefs)
    }

    fn generate(&self) -> anyhow::Result<(VideoPreferences, VideoPlan)> {
        let prefs = self.preferences()?;
        let plan = match self.seed {
            Some(seed) => PlanGenerator::new(SeededPicker::seeded(seed)).generate(&prefs)?,
            None => PlanGenerator::new(ThreadPicker::thread()).generate(&prefs)?,
        };
        Ok((prefs, plan))
    }
}

fn rasterizer(settings: &RenderSettings, fonts_dir: Option<&Path>) -> anyhow::Result<SvgRasterizer> {
    let rasterizer = match fonts_dir {
        Some(dir) => SvgRasterizer::with_fonts_dir(settings.canvas, dir)?,
        None => SvgRasterizer::new(settings.canvas)?,
    };
    info!(
        width = settings.canvas.width,
        height = settings.canvas.height,
        font_faces = rasterizer.font_face_count(),
        "rasterizer ready"
    );
    Ok(rasterizer)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (_, plan) = args.prefs.generate()?;
    let rendered = match args.format {
        PlanFormat::Json => plan.to_json_pretty()? + "\n",
        PlanFormat::Text => plan.to_script(),
    };

    match &args.out {
        Some(out) => {
            slidecast::ensure_parent_dir(out)?;
            std::fs::write(out, rendered).with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("write plan to stdout")?,
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (_, plan) = args.prefs.generate()?;
    let settings = RenderSettings::default();
    let rasterizer = rasterizer(&settings, args.fonts_dir.as_deref())?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    std::fs::write(args.out_dir.join("plan.json"), plan.to_json_pretty()?)
        .context("write plan.json")?;

    for (index, scene) in plan.scenes.iter().enumerate() {
        let asset = rasterizer.render_scene(index, scene)?;
        let path = args.out_dir.join(&asset.filename);
        std::fs::write(&path, &asset.png).with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {} slides to {}", plan.scene_count(), args.out_dir.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (prefs, plan) = args.prefs.generate()?;
    let settings = RenderSettings {
        seconds_per_slide: args.seconds_per_slide,
        overwrite: !args.no_overwrite,
        ..RenderSettings::default()
    };

    if !settings.overwrite && args.out.exists() {
        anyhow::bail!("output file '{}' already exists", args.out.display());
    }
    if !slidecast::is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg is required for MP4 rendering, but was not found on PATH");
    }

    let rasterizer = rasterizer(&settings, args.fonts_dir.as_deref())?;
    let assembler = FfmpegAssembler::new(settings.fps)?;
    let seconds = settings.seconds_for(prefs.pacing);
    info!(fps = assembler.fps(), seconds_per_slide = seconds, "assembling with ffmpeg");

    let mut last_pct = None;
    let video = slidecast::render_video(&plan, seconds, &rasterizer, &assembler, &mut |r| {
        let pct = (r * 100.0).round() as u32;
        if last_pct != Some(pct) {
            last_pct = Some(pct);
            info!(progress = pct, "rendering");
        }
    })?;

    slidecast::ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, &video.mp4)
        .with_context(|| format!("write video '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

use std::{
    io::{BufRead, BufReader, Read as _},
    path::Path,
    process::{Child, Command, Stdio},
};

use anyhow::Context as _;
use tracing::{debug, info, warn};

use crate::{
    encode::{VideoAssembler, concat::ConcatScript, progress::ProgressTracker},
    foundation::error::{SlidecastError, SlidecastResult},
    render::raster::SceneImageAsset,
};

const INPUT_LIST: &str = "input.txt";
const OUTPUT_FILE: &str = "output.mp4";

pub const DEFAULT_FPS: u32 = 30;

/// Assembles slides with the system `ffmpeg` binary via the concat demuxer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FfmpegAssembler {
    fps: u32,
}

impl Default for FfmpegAssembler {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl FfmpegAssembler {
    pub fn new(fps: u32) -> SlidecastResult<Self> {
        if fps == 0 {
            return Err(SlidecastError::encode("fps must be non-zero"));
        }
        Ok(Self { fps })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn command(&self, workdir: &Path) -> Command {
        let mut cmd = Command::new("ffmpeg");
        cmd.current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd.args([
            "-y",
            "-loglevel",
            "error",
            "-nostats",
            "-progress",
            "pipe:1",
            "-f",
            "concat",
            "-safe",
            "0",
            "-i",
            INPUT_LIST,
            "-vsync",
            "vfr",
            "-pix_fmt",
            "yuv420p",
            "-vf",
            &format!("fps={}", self.fps),
            "-movflags",
            "+faststart",
            OUTPUT_FILE,
        ]);
        cmd
    }
}

impl VideoAssembler for FfmpegAssembler {
    #[tracing::instrument(skip_all, fields(slides = assets.len(), fps = self.fps))]
    fn assemble(
        &self,
        assets: &[SceneImageAsset],
        seconds_per_slide: f64,
        progress: &mut dyn FnMut(f64),
    ) -> SlidecastResult<Vec<u8>> {
        let filenames: Vec<&str> = assets.iter().map(|a| a.filename.as_str()).collect();
        let script = ConcatScript::build(filenames.as_slice(), seconds_per_slide)?;

        if !is_ffmpeg_on_path() {
            return Err(SlidecastError::encode(
                "ffmpeg is required for MP4 assembly, but was not found on PATH",
            ));
        }

        let workdir = tempfile::Builder::new()
            .prefix("slidecast-")
            .tempdir()
            .context("failed to create scratch directory for ffmpeg")?;
        for asset in assets {
            let path = workdir.path().join(&asset.filename);
            std::fs::write(&path, &asset.png)
                .with_context(|| format!("failed to write slide '{}'", path.display()))?;
        }
        std::fs::write(workdir.path().join(INPUT_LIST), script.to_string())
            .context("failed to write concat list")?;
        debug!(dir = %workdir.path().display(), total_secs = script.total_secs(), "ffmpeg inputs staged");

        let mut child = self.command(workdir.path()).spawn().map_err(|e| {
            SlidecastError::encode(format!("failed to spawn ffmpeg (is it installed and on PATH?): {e}"))
        })?;

        let (Some(mut stderr), Some(stdout)) = (child.stderr.take(), child.stdout.take()) else {
            stop_child(&mut child);
            return Err(SlidecastError::encode("failed to open ffmpeg output pipes (unexpected)"));
        };
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok::<_, std::io::Error>(stderr_bytes)
        });

        let mut tracker = ProgressTracker::new(progress);
        if let Err(e) = pump_progress(BufReader::new(stdout), script.total_secs(), &mut tracker) {
            // ffmpeg must be gone before the scratch directory is removed.
            stop_child(&mut child);
            let _ = stderr_drain.join();
            return Err(SlidecastError::encode(format!("ffmpeg progress read failed: {e}")));
        }

        let status = child
            .wait()
            .map_err(|e| SlidecastError::encode(format!("failed to wait for ffmpeg to finish: {e}")))?;
        let stderr_bytes = stderr_drain
            .join()
            .map_err(|_| SlidecastError::encode("ffmpeg stderr drain thread panicked"))?
            .map_err(|e| SlidecastError::encode(format!("ffmpeg stderr read failed: {e}")))?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(SlidecastError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        let mp4 = std::fs::read(workdir.path().join(OUTPUT_FILE))
            .context("ffmpeg reported success but produced no output")?;
        tracker.finish();
        info!(bytes = mp4.len(), "assembled video");
        Ok(mp4)
    }
}

/// Forward every `-progress` line from `reader` as a ratio of `total_secs`.
fn pump_progress(
    reader: impl BufRead,
    total_secs: f64,
    tracker: &mut ProgressTracker<'_>,
) -> std::io::Result<()> {
    for line in reader.lines() {
        match parse_progress_line(&line?) {
            Some(ProgressLine::OutTime(secs)) => tracker.report(secs / total_secs),
            Some(ProgressLine::End) => tracker.finish(),
            None => {}
        }
    }
    Ok(())
}

fn stop_child(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!(error = %e, "failed to kill ffmpeg");
    }
    let _ = child.wait();
}

/// One meaningful line of `ffmpeg -progress` output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ProgressLine {
    /// Encoded output position, in seconds.
    OutTime(f64),
    End,
}

/// `out_time_ms` is misnamed by ffmpeg and carries microseconds, same as `out_time_us`.
pub(crate) fn parse_progress_line(line: &str) -> Option<ProgressLine> {
    let (key, value) = line.trim().split_once('=')?;
    match key {
        "out_time_us" | "out_time_ms" => {
            let micros: i64 = value.trim().parse().ok()?;
            (micros >= 0).then_some(ProgressLine::OutTime(micros as f64 / 1_000_000.0))
        }
        "progress" if value.trim() == "end" => Some(ProgressLine::End),
        _ => None,
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> SlidecastResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;

//! ffmpeg concat-demuxer input files.

use std::fmt;

use crate::foundation::error::{SlidecastError, SlidecastResult};

#[derive(Clone, Debug, PartialEq)]
pub struct ConcatScript {
    files: Vec<String>,
    seconds: f64,
}

impl ConcatScript {
    /// Every file shows for `seconds`; the last one is listed twice so the final slide holds.
    pub fn build<S: AsRef<str>>(files: &[S], seconds: f64) -> SlidecastResult<Self> {
        if files.is_empty() {
            return Err(SlidecastError::encode("no slides to assemble"));
        }
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(SlidecastError::encode(format!(
                "seconds per slide must be positive and finite, got {seconds}"
            )));
        }

        let files = files
            .iter()
            .map(|f| {
                let f = f.as_ref();
                if f.is_empty() || f.contains(['\'', '/', '\\', '\n', '\r']) {
                    return Err(SlidecastError::encode(format!(
                        "unsupported slide filename {f:?}"
                    )));
                }
                Ok(f.to_owned())
            })
            .collect::<SlidecastResult<Vec<_>>>()?;

        Ok(Self { files, seconds })
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Playback length including the held last slide.
    pub fn total_secs(&self) -> f64 {
        (self.files.len() as f64 + 1.0) * self.seconds
    }
}

impl fmt::Display for ConcatScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held = self.files.last().into_iter();
        for file in self.files.iter().chain(held) {
            writeln!(f, "file '{file}'")?;
            writeln!(f, "duration {:.2}", self.seconds)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/concat.rs"]
mod tests;

use std::{fmt, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    foundation::error::{SlidecastError, SlidecastResult},
    plan::templates::SceneInput,
};

/// Longest accepted topic, in characters.
pub const MAX_TOPIC_CHARS: usize = 220;
/// Longest accepted call to action, in characters.
pub const MAX_CALL_TO_ACTION_CHARS: usize = 140;
/// Longest accepted personal note, in characters.
pub const MAX_PERSONAL_NOTE_CHARS: usize = 220;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Heartwarming,
    Practical,
    Uplifting,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Heartwarming, Tone::Practical, Tone::Uplifting];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Heartwarming => "heartwarming",
            Tone::Practical => "practical",
            Tone::Uplifting => "uplifting",
        }
    }

    /// Human-facing label for pickers and help output.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Heartwarming => "Heartwarming & Nostalgic",
            Tone::Practical => "Practical & Reassuring",
            Tone::Uplifting => "Uplifting & Hopeful",
        }
    }
}

/// Slide cadence. Only affects rendering, never scene content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Gentle,
    Steady,
    Brisk,
}

impl Pacing {
    pub const ALL: [Pacing; 3] = [Pacing::Gentle, Pacing::Steady, Pacing::Brisk];

    pub fn as_str(self) -> &'static str {
        match self {
            Pacing::Gentle => "gentle",
            Pacing::Steady => "steady",
            Pacing::Brisk => "brisk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pacing::Gentle => "Gentle (slow transitions)",
            Pacing::Steady => "Steady (comfortable pace)",
            Pacing::Brisk => "Brisk (still relaxed)",
        }
    }
}

/// Requested video length; fixes the number of scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Short,
    Standard,
    Extended,
}

impl Duration {
    pub const ALL: [Duration; 3] = [Duration::Short, Duration::Standard, Duration::Extended];

    pub fn as_str(self) -> &'static str {
        match self {
            Duration::Short => "short",
            Duration::Standard => "standard",
            Duration::Extended => "extended",
        }
    }

    pub fn scene_count(self) -> usize {
        match self {
            Duration::Short => 4,
            Duration::Standard => 5,
            Duration::Extended => 6,
        }
    }
}

macro_rules! impl_choice_parsing {
    ($ty:ident, $what:literal) => {
        impl FromStr for $ty {
            type Err = SlidecastError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let known: Vec<&str> = $ty::ALL.iter().map(|v| v.as_str()).collect();
                        SlidecastError::invalid_preference(format!(
                            concat!("unknown ", $what, " \"{}\" (expected one of: {})"),
                            wanted,
                            known.join(", ")
                        ))
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_choice_parsing!(Tone, "tone");
impl_choice_parsing!(Pacing, "pacing");
impl_choice_parsing!(Duration, "duration");

/// What the user asked for. Free-text fields are trimmed at generation time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPreferences {
    pub topic: String,
    pub tone: Tone,
    pub pacing: Pacing,
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_note: Option<String>,
}

impl VideoPreferences {
    pub fn new(topic: impl Into<String>, tone: Tone, pacing: Pacing, duration: Duration) -> Self {
        Self {
            topic: topic.into(),
            tone,
            pacing,
            duration,
            call_to_action: None,
            personal_note: None,
        }
    }

    pub fn with_call_to_action(mut self, call_to_action: impl Into<String>) -> Self {
        self.call_to_action = Some(call_to_action.into());
        self
    }

    pub fn with_personal_note(mut self, personal_note: impl Into<String>) -> Self {
        self.personal_note = Some(personal_note.into());
        self
    }

    /// Parse preferences from JSON. Malformed documents and unknown choices are preference errors.
    pub fn from_json(s: &str) -> SlidecastResult<Self> {
        let prefs: Self = serde_json::from_str(s)
            .map_err(|e| SlidecastError::invalid_preference(format!("preferences JSON: {e}")))?;
        prefs.validate()?;
        Ok(prefs)
    }

    pub fn from_path(path: &Path) -> SlidecastResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read preferences '{}'", path.display()))?;
        Self::from_json(&raw)
    }

    /// Input-boundary check: the generator's requirements plus the form length limits.
    pub fn validate(&self) -> SlidecastResult<()> {
        let input = self.scene_input()?;
        check_len("topic", input.topic, MAX_TOPIC_CHARS)?;
        if let Some(cta) = input.call_to_action {
            check_len("call to action", cta, MAX_CALL_TO_ACTION_CHARS)?;
        }
        if let Some(note) = input.personal_note {
            check_len("personal note", note, MAX_PERSONAL_NOTE_CHARS)?;
        }
        Ok(())
    }

    /// Trimmed view of the free-text fields; empty optionals collapse to `None`.
    ///
    /// Only a blank topic is rejected here. Length limits belong to [`Self::validate`].
    pub(crate) fn scene_input(&self) -> SlidecastResult<SceneInput<'_>> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(SlidecastError::invalid_preference("topic must not be empty"));
        }

        Ok(SceneInput {
            topic,
            personal_note: trimmed_optional(self.personal_note.as_deref()),
            call_to_action: trimmed_optional(self.call_to_action.as_deref()),
            tone: self.tone,
        })
    }
}

fn trimmed_optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_len(field: &str, value: &str, max: usize) -> SlidecastResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(SlidecastError::invalid_preference(format!(
            "{field} is {len} characters long (max {max})"
        )));
    }
    Ok(())
}

/// Five-role color scheme for one slide: `start`/`end` are the background gradient stops,
/// `accent` the decorative overlay, `text`/`subtitle` the foreground inks.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorPalette {
    pub start: String,
    pub end: String,
    pub accent: String,
    pub text: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePlan {
    pub id: String,
    pub title: String,
    pub main_text: String,
    pub subtitle: String,
    pub voice_over: String,
    pub tip: String,
    pub palette: ColorPalette,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlan {
    pub headline: String,
    pub summary: String,
    pub hook: String,
    pub scenes: Vec<ScenePlan>,
    pub outro: String,
    pub posting_tip: String,
    pub soundtrack: String,
}

impl VideoPlan {
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn to_json_pretty(&self) -> SlidecastResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlidecastError::serde(e.to_string()))
    }

    pub fn from_json(s: &str) -> SlidecastResult<Self> {
        serde_json::from_str(s).map_err(|e| SlidecastError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/model.rs"]
mod tests;

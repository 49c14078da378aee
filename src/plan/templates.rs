//! Scene templates: pure functions from generation inputs to a scene's text fields.
//!
//! Identifier and palette assignment happen later in the generator; templates never see them.

use crate::{
    foundation::error::{SlidecastError, SlidecastResult},
    plan::model::{Duration, Tone},
};

/// Trimmed generation inputs shared by every template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneInput<'a> {
    pub topic: &'a str,
    pub personal_note: Option<&'a str>,
    pub call_to_action: Option<&'a str>,
    pub tone: Tone,
}

/// Text fields produced by a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneText {
    pub title: &'static str,
    pub main_text: String,
    pub subtitle: String,
    pub voice_over: String,
    pub tip: String,
}

pub type SceneTemplate = fn(&SceneInput<'_>) -> SceneText;

/// Narrative beats in the order they can appear in a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneBeat {
    Welcome,
    GentleScene,
    MemorySpark,
    PassingTheGift,
    SteadyReminder,
    GentleFarewell,
}

impl SceneBeat {
    /// Every plan opens with these, in this order.
    pub const BASE: [SceneBeat; 4] = [
        SceneBeat::Welcome,
        SceneBeat::GentleScene,
        SceneBeat::MemorySpark,
        SceneBeat::PassingTheGift,
    ];

    /// Closing beats appended after the base four for longer durations.
    pub const CLOSING: [SceneBeat; 2] = [SceneBeat::SteadyReminder, SceneBeat::GentleFarewell];

    pub const ALL: [SceneBeat; 6] = [
        SceneBeat::Welcome,
        SceneBeat::GentleScene,
        SceneBeat::MemorySpark,
        SceneBeat::PassingTheGift,
        SceneBeat::SteadyReminder,
        SceneBeat::GentleFarewell,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SceneBeat::Welcome => "A Warm Welcome",
            SceneBeat::GentleScene => "Gentle Scene",
            SceneBeat::MemorySpark => "Memory Spark",
            SceneBeat::PassingTheGift => "Passing the Gift",
            SceneBeat::SteadyReminder => "Steady Reminder",
            SceneBeat::GentleFarewell => "Gentle Farewell",
        }
    }

    pub fn template(self) -> SceneTemplate {
        match self {
            SceneBeat::Welcome => welcome,
            SceneBeat::GentleScene => gentle_scene,
            SceneBeat::MemorySpark => memory_spark,
            SceneBeat::PassingTheGift => passing_the_gift,
            SceneBeat::SteadyReminder => steady_reminder,
            SceneBeat::GentleFarewell => gentle_farewell,
        }
    }

    pub fn compose(self, input: &SceneInput<'_>) -> SceneText {
        (self.template())(input)
    }

    /// Beats for `duration`: the base four (never fewer), then closing beats in fixed order.
    ///
    /// Scene counts past `BASE.len() + CLOSING.len()` have no templates and are rejected rather
    /// than padded or truncated.
    pub fn sequence(duration: Duration) -> SlidecastResult<Vec<SceneBeat>> {
        let count = duration.scene_count();
        let base = count.min(Self::BASE.len());
        let extras = count - base;

        if base < Self::BASE.len() || extras > Self::CLOSING.len() {
            return Err(SlidecastError::invalid_preference(format!(
                "duration '{duration}' needs {count} scenes; supported range is {}..={}",
                Self::BASE.len(),
                Self::BASE.len() + Self::CLOSING.len()
            )));
        }

        let mut beats = Vec::with_capacity(count);
        beats.extend_from_slice(&Self::BASE[..base]);
        beats.extend_from_slice(&Self::CLOSING[..extras]);
        Ok(beats)
    }
}

/// The note as a closed, quoted sentence, without doubling a period the author already typed.
fn quoted_note(note: &str) -> String {
    let body = note.strip_suffix('.').unwrap_or(note);
    format!("\u{201c}{body}.\u{201d}")
}

fn welcome(input: &SceneInput<'_>) -> SceneText {
    let topic = input.topic.to_lowercase();
    let subtitle = match input.personal_note {
        Some(note) => format!("Inspired by a personal note: {}", quoted_note(note)),
        None => "Slow down, breathe deeply, and settle into a familiar story.".to_owned(),
    };
    let voice_over = match input.tone {
        Tone::Heartwarming => {
            "Close your eyes and imagine a gentle afternoon sun, lighting up old memories."
        }
        Tone::Practical => {
            "Sometimes the best guidance comes from slowing down and noticing the simple details."
        }
        Tone::Uplifting => {
            "A hopeful whisper reminds us there is always something bright to hold onto."
        }
    };

    SceneText {
        title: SceneBeat::Welcome.title(),
        main_text: format!("Let\u{2019}s take a moment to appreciate {topic}."),
        subtitle,
        voice_over: voice_over.to_owned(),
        tip: "Fade in from a soft sepia tone, then brighten as the text appears.".to_owned(),
    }
}

fn gentle_scene(input: &SceneInput<'_>) -> SceneText {
    let topic = input.topic.to_lowercase();
    let subtitle = match input.tone {
        Tone::Practical => "Highlight one thoughtful insight at a time with readable captions.",
        Tone::Heartwarming | Tone::Uplifting => {
            "Pair the words with imagery of calm mornings, gardens, or seaside horizons."
        }
    };
    let voice_over = match input.tone {
        Tone::Heartwarming => "This is how it felt when time moved slowly and every detail mattered.",
        Tone::Practical => "Step by step, the lesson unfolds without hurry.",
        Tone::Uplifting => "Let the rhythm lift spirits gently, like humming a favorite tune.",
    };

    SceneText {
        title: SceneBeat::GentleScene.title(),
        main_text: format!("Picture {topic} with soft colors and easy motion."),
        subtitle: subtitle.to_owned(),
        voice_over: voice_over.to_owned(),
        tip: "Use a slow Ken Burns effect over archival-style photos or illustrations.".to_owned(),
    }
}

fn memory_spark(input: &SceneInput<'_>) -> SceneText {
    let main_text = match input.personal_note {
        Some(note) => format!("{} Let that memory glow a little brighter.", quoted_note(note)),
        None => format!(
            "Share a kind detail about {} that makes people smile.",
            input.topic.to_lowercase()
        ),
    };
    let voice_over = match input.tone {
        Tone::Heartwarming => "Pause for a heartbeat between sentences to keep everyone comfortable.",
        Tone::Practical => "Pause for a heartbeat between steps so every detail can sink in.",
        Tone::Uplifting => "Pause for a heartbeat and let the bright memory linger with a smile.",
    };

    SceneText {
        title: SceneBeat::MemorySpark.title(),
        main_text,
        subtitle: "Hold each word on screen long enough for restful reading.".to_owned(),
        voice_over: voice_over.to_owned(),
        tip: "Add a soft vignette to focus the eye on the center text.".to_owned(),
    }
}

fn passing_the_gift(input: &SceneInput<'_>) -> SceneText {
    let main_text = match input.call_to_action {
        Some(cta) => cta.to_owned(),
        None => format!(
            "Invite a loved one to reflect on {} today.",
            input.topic.to_lowercase()
        ),
    };
    let voice_over = match input.tone {
        Tone::Heartwarming => {
            "Close with a sincere thank you and an open invitation to share stories."
        }
        Tone::Practical => "Close with a sincere thank you and an invitation to pass the advice on.",
        Tone::Uplifting => "Close with a sincere thank you and an invitation to spread the lift.",
    };

    SceneText {
        title: SceneBeat::PassingTheGift.title(),
        main_text,
        subtitle: "Keep the message warm, direct, and encouraging.".to_owned(),
        voice_over: voice_over.to_owned(),
        tip: "Gently animate the call-to-action text so it settles like falling leaves.".to_owned(),
    }
}

fn steady_reminder(input: &SceneInput<'_>) -> SceneText {
    SceneText {
        title: SceneBeat::SteadyReminder.title(),
        main_text: format!(
            "A simple ritual around {} to keep close.",
            input.topic.to_lowercase()
        ),
        subtitle: "Encourage viewers to revisit the clip whenever they need peace.".to_owned(),
        voice_over: "Soft-spoken, like a trusted friend sitting across the table.".to_owned(),
        tip: "Add a slow crossfade between two mellow background images.".to_owned(),
    }
}

fn gentle_farewell(input: &SceneInput<'_>) -> SceneText {
    SceneText {
        title: SceneBeat::GentleFarewell.title(),
        main_text: format!(
            "Take one more peaceful look at {}.",
            input.topic.to_lowercase()
        ),
        subtitle: "Let the colors dim softly as the story concludes.".to_owned(),
        voice_over: "Offer gratitude for the shared moment and invite quiet reflection.".to_owned(),
        tip: "Finish with a soft glow that lingers for a second before fading out.".to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/templates.rs"]
mod tests;

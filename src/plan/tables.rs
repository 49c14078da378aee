//! Fixed fragment pools the generator draws from.
//!
//! Everything here is data: the composer only indexes into these tables, so each pool can be
//! tested exhaustively per enum value.

use crate::plan::model::{ColorPalette, Duration, Tone};

/// Tone-specific headline rule and fragment pools.
#[derive(Debug)]
pub struct ToneProfile {
    pub headline: fn(&str) -> String,
    pub summaries: [&'static str; 3],
    pub soundtracks: [&'static str; 3],
    pub outros: [&'static str; 3],
}

fn heartwarming_headline(topic: &str) -> String {
    format!("Remembering {topic} Together")
}

fn practical_headline(topic: &str) -> String {
    format!("Simple Wisdom on {topic}")
}

fn uplifting_headline(topic: &str) -> String {
    format!("A Gentle Lift: {topic}")
}

pub static HEARTWARMING: ToneProfile = ToneProfile {
    headline: heartwarming_headline,
    summaries: [
        "Share a gentle stroll down memory lane with warm visuals and soft narration.",
        "Celebrate treasured moments that feel familiar, comforting, and kind.",
        "Offer a peaceful reflection that feels like sitting on a porch at dusk.",
    ],
    soundtracks: [
        "Tender acoustic guitar with soft vinyl crackle",
        "Slow waltz piano with warm reverb",
        "Gentle strings with mellow harmonies",
    ],
    outros: [
        "Thank viewers for sharing the memory and invite them to reminisce in the comments.",
        "Encourage a loved one to watch and add their own cherished moment.",
        "Close with a quiet pause and a simple invitation to keep the tradition alive.",
    ],
};

pub static PRACTICAL: ToneProfile = ToneProfile {
    headline: practical_headline,
    summaries: [
        "Offer steady, trustworthy guidance that feels like advice from a cherished friend.",
        "Focus on practical tips shared in a calm, reassuring pace.",
        "Blend visual cues and easy steps that are gentle on the eyes and mind.",
    ],
    soundtracks: [
        "Laid-back acoustic bass with soft brushes",
        "Light instrumental folk with calm tempo",
        "Warm instrumental lullaby with soft chimes",
    ],
    outros: [
        "Invite viewers to pass along their own wisdom in the comments.",
        "Encourage saving the clip so family can revisit the advice later.",
        "Close with a peaceful reminder that it is never too late to learn or teach.",
    ],
};

pub static UPLIFTING: ToneProfile = ToneProfile {
    headline: uplifting_headline,
    summaries: [
        "Blend gentle motion and bright colors to spark a hopeful smile.",
        "Share kind words that feel like a friendly neighbor dropping by.",
        "Keep the pacing relaxed yet optimistic, with uplifting imagery.",
    ],
    soundtracks: [
        "Sunny ukulele with soft humming background",
        "Slow swing with brushed drums and upright bass",
        "Dreamy synth pads with tranquil bells",
    ],
    outros: [
        "Invite viewers to send the video to someone who could use a lift.",
        "Close with a gentle affirmation and friendly wave goodbye.",
        "Encourage everyone to take a slow breath and carry the warmth forward.",
    ],
};

impl Tone {
    pub fn profile(self) -> &'static ToneProfile {
        match self {
            Tone::Heartwarming => &HEARTWARMING,
            Tone::Practical => &PRACTICAL,
            Tone::Uplifting => &UPLIFTING,
        }
    }
}

/// Static form of [`ColorPalette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteSpec {
    pub start: &'static str,
    pub end: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub subtitle: &'static str,
}

impl From<&PaletteSpec> for ColorPalette {
    fn from(p: &PaletteSpec) -> Self {
        Self {
            start: p.start.to_owned(),
            end: p.end.to_owned(),
            accent: p.accent.to_owned(),
            text: p.text.to_owned(),
            subtitle: p.subtitle.to_owned(),
        }
    }
}

pub const PALETTE_POOL: [PaletteSpec; 4] = [
    PaletteSpec {
        start: "#f9e9d3",
        end: "#f4d1bc",
        accent: "#bb7b4b",
        text: "#4a3021",
        subtitle: "#5d3b27",
    },
    PaletteSpec {
        start: "#f3f5d7",
        end: "#dcebd3",
        accent: "#7c9c6b",
        text: "#37442d",
        subtitle: "#4b5b3f",
    },
    PaletteSpec {
        start: "#f2e9ff",
        end: "#d7d9f4",
        accent: "#8079c9",
        text: "#342f51",
        subtitle: "#4e4777",
    },
    PaletteSpec {
        start: "#fdf1f0",
        end: "#f7dada",
        accent: "#d27d78",
        text: "#603636",
        subtitle: "#744646",
    },
];

/// Shared across every tone and duration.
pub const SUPPORTIVE_HOOKS: [&str; 3] = [
    "A soft glide through yesterday\u{2019}s wisdom.",
    "Stories that feel like a familiar armchair by the window.",
    "Thoughtful reflections to share over afternoon tea.",
];

const SHORT_POSTING_NOTES: [&str; 2] = [
    "Keep each slide on screen long enough for relaxed reading (around 6-7 seconds).",
    "Use gentle zoom-ins and soft dissolves between visuals.",
];

const STANDARD_POSTING_NOTES: [&str; 2] = [
    "Allow a calm breath between each idea; avoid sudden transitions.",
    "Add subtle ambient sounds like birdsong or kettle boiling very softly.",
];

const EXTENDED_POSTING_NOTES: [&str; 2] = [
    "Include breathing room between segments so viewers never feel rushed.",
    "Consider repeating the main takeaway softly near the end for emphasis.",
];

impl Duration {
    pub fn posting_notes(self) -> &'static [&'static str; 2] {
        match self {
            Duration::Short => &SHORT_POSTING_NOTES,
            Duration::Standard => &STANDARD_POSTING_NOTES,
            Duration::Extended => &EXTENDED_POSTING_NOTES,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/tables.rs"]
mod tests;

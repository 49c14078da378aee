//! Rendering cadence derived from [`Pacing`] and display labels for [`Duration`].

use crate::plan::model::{Duration, Pacing, VideoPlan};

impl Pacing {
    /// How long each slide stays on screen in the assembled video.
    pub fn seconds_per_scene(self) -> f64 {
        match self {
            Pacing::Gentle => 7.0,
            Pacing::Steady => 6.0,
            Pacing::Brisk => 5.0,
        }
    }

    /// Auto-advance interval for a looping on-screen preview.
    pub fn preview_rotation(self) -> std::time::Duration {
        match self {
            Pacing::Gentle => std::time::Duration::from_millis(9000),
            Pacing::Steady => std::time::Duration::from_millis(7000),
            Pacing::Brisk => std::time::Duration::from_millis(5500),
        }
    }
}

impl Duration {
    pub fn label(self) -> &'static str {
        match self {
            Duration::Short => "45 seconds (4 scenes)",
            Duration::Standard => "60 seconds (5 scenes)",
            Duration::Extended => "90 seconds (6 scenes)",
        }
    }
}

impl VideoPlan {
    /// Runtime of the assembled video, including the held last frame.
    pub fn estimated_runtime_secs(&self, seconds_per_scene: f64) -> f64 {
        if self.scenes.is_empty() {
            return 0.0;
        }
        (self.scenes.len() as f64 + 1.0) * seconds_per_scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/pacing.rs"]
mod tests;

use super::*;
use crate::plan::{generator::PlanGenerator, model::Tone, model::VideoPreferences, picker::ScriptedPicker};

#[test]
fn slower_pacing_holds_slides_longer() {
    assert_eq!(Pacing::Gentle.seconds_per_scene(), 7.0);
    assert_eq!(Pacing::Steady.seconds_per_scene(), 6.0);
    assert_eq!(Pacing::Brisk.seconds_per_scene(), 5.0);
    assert!(Pacing::Gentle.preview_rotation() > Pacing::Steady.preview_rotation());
    assert!(Pacing::Steady.preview_rotation() > Pacing::Brisk.preview_rotation());
    assert_eq!(Pacing::Brisk.preview_rotation().as_millis(), 5500);
}

#[test]
fn duration_labels_mention_scene_counts() {
    for d in Duration::ALL {
        assert!(d.label().contains(&format!("{} scenes", d.scene_count())));
    }
}

#[test]
fn runtime_counts_the_held_last_frame() {
    let prefs = VideoPreferences::new("Tea", Tone::Practical, Pacing::Steady, Duration::Short);
    let plan = PlanGenerator::new(ScriptedPicker::default())
        .generate(&prefs)
        .unwrap();
    assert_eq!(plan.estimated_runtime_secs(Pacing::Steady.seconds_per_scene()), 30.0);

    let empty = VideoPlan {
        scenes: Vec::new(),
        ..plan
    };
    assert_eq!(empty.estimated_runtime_secs(6.0), 0.0);
}

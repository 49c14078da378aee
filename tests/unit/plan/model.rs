use super::*;

fn prefs() -> VideoPreferences {
    VideoPreferences::new(
        "  Daily gratitude rituals ",
        Tone::Heartwarming,
        Pacing::Gentle,
        Duration::Standard,
    )
}

#[test]
fn scene_counts_follow_duration() {
    assert_eq!(Duration::Short.scene_count(), 4);
    assert_eq!(Duration::Standard.scene_count(), 5);
    assert_eq!(Duration::Extended.scene_count(), 6);
}

#[test]
fn choices_parse_case_insensitively_and_reject_unknowns() {
    assert_eq!("Practical".parse::<Tone>().unwrap(), Tone::Practical);
    assert_eq!(" brisk ".parse::<Pacing>().unwrap(), Pacing::Brisk);
    assert_eq!("EXTENDED".parse::<Duration>().unwrap(), Duration::Extended);

    let err = "melancholy".parse::<Tone>().unwrap_err();
    assert!(err.is_invalid_preference());
    assert!(err.to_string().contains("heartwarming, practical, uplifting"));
    assert!("epic".parse::<Duration>().is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for tone in Tone::ALL {
        assert_eq!(tone.to_string().parse::<Tone>().unwrap(), tone);
    }
    for pacing in Pacing::ALL {
        assert_eq!(pacing.to_string().parse::<Pacing>().unwrap(), pacing);
    }
}

#[test]
fn scene_input_trims_and_drops_blank_optionals() {
    let p = prefs()
        .with_call_to_action("   ")
        .with_personal_note("  Sunday letters  ");
    let input = p.scene_input().unwrap();
    assert_eq!(input.topic, "Daily gratitude rituals");
    assert_eq!(input.call_to_action, None);
    assert_eq!(input.personal_note, Some("Sunday letters"));
    assert_eq!(input.tone, Tone::Heartwarming);
}

#[test]
fn blank_topic_is_invalid() {
    let mut p = prefs();
    p.topic = " \t\n".to_owned();
    let err = p.validate().unwrap_err();
    assert!(err.is_invalid_preference());
}

#[test]
fn overlong_fields_are_invalid() {
    let mut p = prefs();
    p.topic = "a".repeat(MAX_TOPIC_CHARS + 1);
    assert!(p.validate().is_err());

    let p = prefs().with_call_to_action("b".repeat(MAX_CALL_TO_ACTION_CHARS + 1));
    assert!(p.validate().is_err());

    let p = prefs().with_personal_note("c".repeat(MAX_PERSONAL_NOTE_CHARS + 1));
    assert!(p.validate().is_err());

    let p = prefs().with_personal_note("c".repeat(MAX_PERSONAL_NOTE_CHARS));
    p.validate().unwrap();
}

#[test]
fn preferences_json_uses_camel_case_and_lowercase_choices() {
    let p = VideoPreferences::from_json(
        r#"{
            "topic": "Garden mornings",
            "tone": "uplifting",
            "pacing": "steady",
            "duration": "short",
            "callToAction": "Call a friend today.",
            "personalNote": "Grandma's tomato patch."
        }"#,
    )
    .unwrap();
    assert_eq!(p.tone, Tone::Uplifting);
    assert_eq!(p.pacing, Pacing::Steady);
    assert_eq!(p.duration, Duration::Short);
    assert_eq!(p.call_to_action.as_deref(), Some("Call a friend today."));
    assert_eq!(p.personal_note.as_deref(), Some("Grandma's tomato patch."));
}

#[test]
fn preferences_json_rejects_unknown_tone_and_blank_topic() {
    let err = VideoPreferences::from_json(
        r#"{"topic":"x","tone":"grim","pacing":"gentle","duration":"short"}"#,
    )
    .unwrap_err();
    assert!(err.is_invalid_preference());

    let err = VideoPreferences::from_json(
        r#"{"topic":"  ","tone":"practical","pacing":"gentle","duration":"short"}"#,
    )
    .unwrap_err();
    assert!(err.is_invalid_preference());
}

#[test]
fn preferences_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(
        &path,
        r#"{"topic":"Porch swings","tone":"practical","pacing":"brisk","duration":"extended"}"#,
    )
    .unwrap();

    let p = VideoPreferences::from_path(&path).unwrap();
    assert_eq!(p.topic, "Porch swings");
    assert_eq!(p.call_to_action, None);

    let missing = VideoPreferences::from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(missing.to_string().contains("nope.json"));
}

#[test]
fn plan_json_keys_are_camel_case() {
    let plan = VideoPlan {
        headline: "h".into(),
        summary: "s".into(),
        hook: "k".into(),
        scenes: vec![ScenePlan {
            id: "a1".into(),
            title: "t".into(),
            main_text: "m".into(),
            subtitle: "sub".into(),
            voice_over: "v".into(),
            tip: "tip".into(),
            palette: ColorPalette {
                start: "#000000".into(),
                end: "#111111".into(),
                accent: "#222222".into(),
                text: "#333333".into(),
                subtitle: "#444444".into(),
            },
        }],
        outro: "o".into(),
        posting_tip: "p".into(),
        soundtrack: "st".into(),
    };

    let json = plan.to_json_pretty().unwrap();
    assert!(json.contains("\"mainText\""));
    assert!(json.contains("\"voiceOver\""));
    assert!(json.contains("\"postingTip\""));
    assert_eq!(VideoPlan::from_json(&json).unwrap(), plan);
}

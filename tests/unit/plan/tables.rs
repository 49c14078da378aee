use super::*;
use crate::foundation::color::Rgb8;

#[test]
fn headline_rules_per_tone() {
    assert_eq!(
        (Tone::Heartwarming.profile().headline)("Sunday dinners"),
        "Remembering Sunday dinners Together"
    );
    assert_eq!(
        (Tone::Practical.profile().headline)("Sunday dinners"),
        "Simple Wisdom on Sunday dinners"
    );
    assert_eq!(
        (Tone::Uplifting.profile().headline)("Sunday dinners"),
        "A Gentle Lift: Sunday dinners"
    );
}

#[test]
fn every_tone_pool_is_filled_with_distinct_fragments() {
    for tone in Tone::ALL {
        let profile = tone.profile();
        for pool in [&profile.summaries, &profile.soundtracks, &profile.outros] {
            assert!(pool.iter().all(|s| !s.trim().is_empty()), "{tone}");
            let mut sorted = pool.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), pool.len(), "{tone}");
        }
    }
}

#[test]
fn soundtracks_do_not_overlap_between_tones() {
    for a in Tone::ALL {
        for b in Tone::ALL {
            if a == b {
                continue;
            }
            for s in a.profile().soundtracks {
                assert!(!b.profile().soundtracks.contains(&s));
            }
        }
    }
}

#[test]
fn every_duration_has_posting_notes() {
    for duration in Duration::ALL {
        assert!(duration.posting_notes().iter().all(|s| !s.is_empty()));
    }
    assert_ne!(
        Duration::Short.posting_notes(),
        Duration::Extended.posting_notes()
    );
}

#[test]
fn palette_pool_colors_are_valid_hex() {
    for spec in &PALETTE_POOL {
        let palette = ColorPalette::from(spec);
        for c in [
            &palette.start,
            &palette.end,
            &palette.accent,
            &palette.text,
            &palette.subtitle,
        ] {
            Rgb8::parse_hex(c).unwrap();
        }
    }
}

#[test]
fn hooks_are_shared_and_non_empty() {
    assert_eq!(SUPPORTIVE_HOOKS.len(), 3);
    assert!(SUPPORTIVE_HOOKS.iter().all(|h| h.ends_with('.')));
}

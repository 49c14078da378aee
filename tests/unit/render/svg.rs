use super::*;
use crate::plan::model::ColorPalette;

fn scene(title: &str) -> ScenePlan {
    ScenePlan {
        id: "s1".to_owned(),
        title: title.to_owned(),
        main_text: "Let\u{2019}s take a moment to appreciate porch swings & lemonade.".to_owned(),
        subtitle: "Slow down, breathe deeply, and settle into a familiar story.".to_owned(),
        voice_over: "Close your eyes and imagine a gentle afternoon sun.".to_owned(),
        tip: "Fade in from a soft sepia tone.".to_owned(),
        palette: ColorPalette {
            start: "#F9E9D3".to_owned(),
            end: "#f4d1bc".to_owned(),
            accent: "#bb7b4b".to_owned(),
            text: "#4a3021".to_owned(),
            subtitle: "#5d3b27".to_owned(),
        },
    }
}

#[test]
fn wrap_keeps_short_text_on_one_line() {
    assert_eq!(wrap_text("A Warm Welcome", &TITLE, 840.0), vec!["A Warm Welcome"]);
    assert!(wrap_text("   ", &TITLE, 840.0).is_empty());
}

#[test]
fn wrap_breaks_long_text_without_losing_words() {
    let text = "Pair the words with imagery of calm mornings, gardens, or seaside horizons.";
    let lines = wrap_text(text, &SUBTITLE, 400.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
    for line in &lines[..lines.len() - 1] {
        assert!(SUBTITLE.estimate_width(line) <= 400.0, "{line}");
    }
}

#[test]
fn wrap_never_leaves_an_oversized_first_word_alone_on_an_empty_line() {
    let lines = wrap_text("Supercalifragilistic word", &TITLE, 100.0);
    assert_eq!(lines, vec!["Supercalifragilistic", "word"]);
}

#[test]
fn escape_handles_markup_characters() {
    assert_eq!(
        escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
    );
}

#[test]
fn document_uses_palette_roles_and_escapes_text() {
    let svg = scene_svg(&scene("Tea <& Toast>"), Canvas::default()).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="1080" height="1350""#));
    assert!(svg.contains(r##"stop-color="#f9e9d3""##));
    assert!(svg.contains(r##"stop-color="#f4d1bc""##));
    assert!(svg.contains(r##"<ellipse"##));
    assert!(svg.contains(r##"fill="#bb7b4b" fill-opacity="0.2""##));
    assert!(svg.contains(r##"fill="#5d3b27""##));
    assert!(svg.contains("Tea &lt;&amp; Toast&gt;"));
    assert!(svg.contains("lemonade."));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn invalid_palette_is_a_render_error() {
    let mut s = scene("Bad ink");
    s.palette.text = "brown".to_owned();
    let err = scene_svg(&s, Canvas::default()).unwrap_err();
    assert!(err.to_string().contains("render error:"));
    assert!(err.to_string().contains("palette text"));
}

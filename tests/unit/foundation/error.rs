use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlidecastError::invalid_preference("x")
            .to_string()
            .contains("invalid preference:")
    );
    assert!(
        SlidecastError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SlidecastError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SlidecastError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlidecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_invalid_preference());
}

#[test]
fn invalid_preference_is_classified() {
    assert!(SlidecastError::invalid_preference("empty topic").is_invalid_preference());
    assert!(!SlidecastError::render("no pixmap").is_invalid_preference());
}

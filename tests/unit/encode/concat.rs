use super::*;

#[test]
fn script_lists_each_slide_and_holds_the_last() {
    let script = ConcatScript::build(&["slide_00.png", "slide_01.png", "slide_02.png"], 6.0).unwrap();
    assert_eq!(
        script.to_string(),
        "file 'slide_00.png'\nduration 6.00\n\
         file 'slide_01.png'\nduration 6.00\n\
         file 'slide_02.png'\nduration 6.00\n\
         file 'slide_02.png'\nduration 6.00\n"
    );
    assert_eq!(script.total_secs(), 24.0);
    assert_eq!(script.seconds(), 6.0);
}

#[test]
fn fractional_durations_use_two_decimals() {
    let script = ConcatScript::build(&["a.png"], 5.125).unwrap();
    assert!(script.to_string().contains("duration 5.12\n") || script.to_string().contains("duration 5.13\n"));
    assert_eq!(script.to_string().lines().count(), 4);
}

#[test]
fn empty_input_is_rejected() {
    let none: [&str; 0] = [];
    let err = ConcatScript::build(&none, 5.0).unwrap_err();
    assert!(err.to_string().starts_with("encode error:"));
}

#[test]
fn bad_durations_are_rejected() {
    for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(ConcatScript::build(&["a.png"], secs).is_err(), "{secs}");
    }
}

#[test]
fn filenames_that_break_the_list_are_rejected() {
    for name in ["", "it's.png", "../a.png", "a\\b.png", "a\n.png"] {
        assert!(ConcatScript::build(&[name], 5.0).is_err(), "{name:?}");
    }
}

use super::*;

#[test]
fn scripted_picker_cycles_and_counts() {
    let mut p = ScriptedPicker::new(vec![2, 0, 1]);
    assert_eq!(p.pick_index(3), 2);
    assert_eq!(p.pick_index(3), 0);
    assert_eq!(p.pick_index(3), 1);
    assert_eq!(p.pick_index(3), 2);
    assert_eq!(p.picks_made(), 4);
    assert_eq!(p.next_id(), "scene-1");
    assert_eq!(p.next_id(), "scene-2");
}

#[test]
fn pick_reduces_out_of_range_answers() {
    let pool = ["a", "b", "c"];
    let mut p = ScriptedPicker::constant(7);
    assert_eq!(*pick(&mut p, &pool), "b");
}

#[test]
fn empty_script_answers_zero() {
    let mut p = ScriptedPicker::default();
    assert_eq!(p.pick_index(4), 0);
}

#[test]
fn rng_picker_stays_in_range() {
    let mut p = ThreadPicker::thread();
    for len in 1..10 {
        for _ in 0..50 {
            assert!(p.pick_index(len) < len);
        }
    }
    assert_eq!(p.pick_index(0), 0);
}

#[test]
fn rng_ids_are_eight_base36_chars() {
    let mut p = ThreadPicker::default();
    for _ in 0..20 {
        let id = p.next_id();
        assert_eq!(id.len(), 8);
        assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }
}

#[test]
fn seeded_pickers_repeat() {
    let mut a = SeededPicker::seeded(42);
    let mut b = SeededPicker::seeded(42);
    let xs: Vec<usize> = (0..16).map(|_| a.pick_index(4)).collect();
    let ys: Vec<usize> = (0..16).map(|_| b.pick_index(4)).collect();
    assert_eq!(xs, ys);
    assert_eq!(a.next_id(), b.next_id());
}

#[test]
fn picker_works_through_a_mutable_reference() {
    let mut inner = ScriptedPicker::constant(1);
    let mut by_ref: &mut ScriptedPicker = &mut inner;
    assert_eq!(*pick(&mut by_ref, &["x", "y"]), "y");
    assert_eq!(inner.picks_made(), 1);
}

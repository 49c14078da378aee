use super::*;

fn collect(ratios: &[f64], finish: bool) -> Vec<f64> {
    let mut seen = Vec::new();
    let mut sink = |r: f64| seen.push(r);
    {
        let mut tracker = ProgressTracker::new(&mut sink);
        for &r in ratios {
            tracker.report(r);
        }
        if finish {
            tracker.finish();
        }
    }
    seen
}

#[test]
fn reports_are_clamped_and_monotonic() {
    assert_eq!(
        collect(&[-0.5, 0.2, 0.1, 0.2, 0.7, 1.4, 0.9], false),
        vec![0.0, 0.2, 0.7, 1.0]
    );
}

#[test]
fn nan_is_ignored() {
    assert_eq!(collect(&[0.3, f64::NAN, 0.4], false), vec![0.3, 0.4]);
}

#[test]
fn finish_reports_one_once() {
    assert_eq!(collect(&[0.5], true), vec![0.5, 1.0]);
    assert_eq!(collect(&[1.0], true), vec![1.0]);
}

#[test]
fn last_tracks_the_latest_forwarded_value() {
    let mut sink = |_: f64| {};
    let mut tracker = ProgressTracker::new(&mut sink);
    assert_eq!(tracker.last(), None);
    tracker.report(0.25);
    tracker.report(0.1);
    assert_eq!(tracker.last(), Some(0.25));
}

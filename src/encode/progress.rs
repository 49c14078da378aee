/// Forwards progress ratios clamped to `[0, 1]`, dropping anything that would move backwards or
/// repeat the last reported value.
pub struct ProgressTracker<'a> {
    sink: &'a mut dyn FnMut(f64),
    last: Option<f64>,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(sink: &'a mut dyn FnMut(f64)) -> Self {
        Self { sink, last: None }
    }

    pub fn report(&mut self, ratio: f64) {
        if ratio.is_nan() {
            return;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        if self.last.is_some_and(|last| ratio <= last) {
            return;
        }
        self.last = Some(ratio);
        (self.sink)(ratio);
    }

    pub fn finish(&mut self) {
        self.report(1.0);
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

impl std::fmt::Debug for ProgressTracker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/progress.rs"]
mod tests;

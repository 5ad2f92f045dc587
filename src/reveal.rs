/// Share of an element that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.6;

// Observers report the crossing itself, which often lands a hair under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot latch for a visibility-gated entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOnce {
    threshold: f64,
    fired: bool,
}

impl RevealOnce {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Feed one observation. Returns `true` only for the first one that qualifies.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.fired || !intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

impl Default for RevealOnce {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = RevealOnce::default();
        assert!(!trigger.observe(true, 0.3));
        assert!(!trigger.fired());
        assert!(trigger.observe(true, 0.6));
        assert!(trigger.fired());
    }

    #[test]
    fn never_fires_again_after_leaving_and_returning() {
        let mut trigger = RevealOnce::default();
        assert!(trigger.observe(true, 1.0));
        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 1.0));
        assert!(trigger.fired());
    }

    #[test]
    fn crossing_reported_just_under_threshold_counts() {
        let mut trigger = RevealOnce::default();
        assert!(trigger.observe(true, 0.5999));
    }

    #[test]
    fn ignores_non_intersecting_entries() {
        let mut trigger = RevealOnce::new(0.0);
        assert!(!trigger.observe(false, 0.0));
        assert!(trigger.observe(true, 0.0));
    }
}

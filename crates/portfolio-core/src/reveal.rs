use std::collections::HashSet;

/// Intersection ratio at which a section is considered visible.
pub const REVEAL_THRESHOLD: f32 = 0.2;

/// Bookkeeping for scroll-reveal animations.
///
/// The JS shell owns the IntersectionObserver and reports each element's
/// intersection ratio here; the tracker decides whether the `active` class
/// should be added. Each element activates at most once — after that the
/// shell unobserves it, and repeat reports are ignored.
pub struct RevealTracker {
    threshold: f32,
    activated: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            activated: HashSet::new(),
        }
    }

    /// Report an intersection ratio for an element. Returns `true` exactly
    /// once per element, when it first crosses the threshold.
    pub fn report(&mut self, key: &str, ratio: f32) -> bool {
        if ratio < self.threshold || self.activated.contains(key) {
            return false;
        }
        self.activated.insert(key.to_owned());
        true
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.activated.contains(key)
    }

    pub fn active_count(&self) -> usize {
        self.activated.len()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

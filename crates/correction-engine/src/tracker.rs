// Resolution state for one analysis snapshot
use std::collections::HashSet;

/// Records which findings have been acted on, keyed by fingerprint.
///
/// State is scoped to one analysis snapshot: offsets from a stale analysis
/// are meaningless once the buffer changes shape, so the session resets the
/// tracker on every new submission instead of merging.
#[derive(Debug, Clone, Default)]
pub struct ResolutionTracker {
    resolved: HashSet<String>,
}

impl ResolutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: marking twice is the same as marking once
    pub fn mark_resolved(&mut self, fingerprint: &str) {
        self.resolved.insert(fingerprint.to_string());
    }

    pub fn is_resolved(&self, fingerprint: &str) -> bool {
        self.resolved.contains(fingerprint)
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Forget everything; called at the start of every new analysis
    pub fn reset(&mut self) {
        self.resolved.clear();
    }
}

use std::collections::HashSet;
use std::time::Duration;

/// How long a newly staged entry keeps its visual emphasis.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

/// Handle for one scheduled expiry. Each `mark_recent` call invalidates
/// every token issued before it, so a timer that fires late clears nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryToken(u64);

/// Tracks which staging positions are inside their emphasis window.
///
/// Invariant: every tracked position is a valid current position in the
/// staging list. The removal path keeps this true via `on_removal`.
#[derive(Debug, Default)]
pub struct HighlightTracker {
    recent: HashSet<usize>,
    generation: u64,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self, position: usize) -> bool {
        self.recent.contains(&position)
    }

    pub fn positions(&self) -> &HashSet<usize> {
        &self.recent
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Replaces the tracked set with `positions`. A fresh batch supersedes
    /// any still-highlighted older one; the sets do not union.
    pub fn mark_recent(&mut self, positions: impl IntoIterator<Item = usize>) -> ExpiryToken {
        self.recent = positions.into_iter().collect();
        self.generation += 1;
        ExpiryToken(self.generation)
    }

    /// Clears the whole set, but only if `token` is still the latest one
    /// issued. A superseded token is a no-op: the set it would have cleared
    /// is already gone.
    pub fn expire(&mut self, token: ExpiryToken) {
        if token.0 == self.generation {
            self.recent.clear();
        }
    }

    /// Called by the removal path: drops `removed` if tracked and shifts
    /// every member above it down by one, mirroring the list re-index.
    pub fn on_removal(&mut self, removed: usize) {
        self.recent = self
            .recent
            .iter()
            .filter(|&&position| position != removed)
            .map(|&position| if position > removed { position - 1 } else { position })
            .collect();
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

use crate::models::CandidateFile;

/// Ordered collection of accepted files awaiting analysis.
///
/// An entry's position is its identity: zero-based, dense in `[0, len)`
/// after every operation, shifting down when an earlier entry is removed.
/// Duplicates are allowed; there is no dedup by name or content.
#[derive(Debug, Default)]
pub struct StagingList {
    entries: Vec<CandidateFile>,
}

impl StagingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CandidateFile] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&CandidateFile> {
        self.entries.get(position)
    }

    /// Appends the batch at the tail, preserving arrival order, and returns
    /// the positions assigned to the new entries.
    pub fn append(&mut self, batch: Vec<CandidateFile>) -> Vec<usize> {
        let start = self.entries.len();
        self.entries.extend(batch);
        (start..self.entries.len()).collect()
    }

    /// Removes the entry at `position` and returns it. Out-of-bounds
    /// positions are a deliberate no-op, not an error.
    pub fn remove_at(&mut self, position: usize) -> Option<CandidateFile> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    /// Full teardown, used when the page unmounts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

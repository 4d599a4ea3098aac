pub mod highlight;
pub mod list;

pub use highlight::{ExpiryToken, HIGHLIGHT_DURATION, HighlightTracker};
pub use list::StagingList;

use crate::models::CandidateFile;
use crate::services::notifier::{Notifier, Severity};
use crate::utils::validation;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Which ingestion event produced a batch. The two sources behave
/// identically once the platform handles are translated; the distinction
/// only shows up in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestSource {
    Dropped,
    Picked,
}

/// Owned state of one upload-page visit: the staging list, the highlight
/// tracker, and the notifier the surface renders toasts from.
///
/// All mutation goes through `&mut self`; the surface's event handlers run
/// to completion one at a time, so no internal locking is needed. Created
/// empty per visit and dropped (or `clear`ed) on unmount.
pub struct StagingSession {
    list: StagingList,
    highlights: HighlightTracker,
    notifier: Arc<dyn Notifier>,
}

impl StagingSession {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            list: StagingList::new(),
            highlights: HighlightTracker::new(),
            notifier,
        }
    }

    pub fn entries(&self) -> &[CandidateFile] {
        self.list.entries()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlights.is_highlighted(position)
    }

    pub fn highlighted_positions(&self) -> &HashSet<usize> {
        self.highlights.positions()
    }

    /// Files dropped onto the upload surface.
    pub fn ingest_dropped(&mut self, batch: Vec<CandidateFile>) -> Option<ExpiryToken> {
        self.ingest(IngestSource::Dropped, batch)
    }

    /// Files chosen through the file picker.
    pub fn ingest_picked(&mut self, batch: Vec<CandidateFile>) -> Option<ExpiryToken> {
        self.ingest(IngestSource::Picked, batch)
    }

    fn ingest(&mut self, source: IngestSource, batch: Vec<CandidateFile>) -> Option<ExpiryToken> {
        let outcome = validation::partition_batch(batch);

        if !outcome.rejected.is_empty() {
            debug!(
                "🚫 rejected {} file(s) from {:?} batch",
                outcome.rejected.len(),
                source
            );
            self.notifier.notify(
                "Some files were rejected",
                validation::SUPPORTED_CATEGORIES,
                Severity::Destructive,
            );
        }

        if outcome.accepted.is_empty() {
            return None;
        }

        let count = outcome.accepted.len();
        let positions = self.list.append(outcome.accepted);
        self.notifier.notify(
            "Documents uploaded!",
            &format!("{} file(s) ready for analysis", count),
            Severity::Info,
        );
        debug!("📥 staged {} file(s) via {:?}", count, source);

        // The caller schedules the expiry for the token; a later batch
        // supersedes it before the timer fires.
        Some(self.highlights.mark_recent(positions))
    }

    /// Removal entry point for the surface. Out-of-bounds positions are
    /// ignored; on a real removal the highlight set is re-indexed in the
    /// same step so it never references a gone entry.
    pub fn request_removal(&mut self, position: usize) {
        if self.list.remove_at(position).is_some() {
            self.highlights.on_removal(position);
        }
    }

    /// The "Analyze Documents" action. Analysis itself is out of scope:
    /// this only reports readiness. No network call is made either way.
    pub fn request_analysis(&self) {
        if self.list.is_empty() {
            self.notifier.notify(
                "No documents to analyze",
                "Please upload at least one document first",
                Severity::Destructive,
            );
            return;
        }

        self.notifier.notify(
            "Analysis started",
            "Your documents are being processed...",
            Severity::Info,
        );
    }

    pub fn expire_highlights(&mut self, token: ExpiryToken) {
        self.highlights.expire(token);
    }

    /// Full teardown on page exit.
    pub fn clear(&mut self) {
        self.list.clear();
        self.highlights.clear();
    }
}

/// Expiry driver for a shared session: waits out the display window, then
/// retires `token`'s batch. If a newer batch superseded the token in the
/// meantime, the final `expire` call is a no-op.
pub async fn schedule_expiry(session: Arc<Mutex<StagingSession>>, token: ExpiryToken) {
    tokio::time::sleep(HIGHLIGHT_DURATION).await;
    session.lock().await.expire_highlights(token);
}

//! Debounced, coalescing persistence flushes.
//!
//! Edits request a flush instead of saving directly. Durable requests flush on
//! the next poll; ephemeral requests (continuous inputs such as a slider drag)
//! keep replacing one pending deadline, so a whole burst commits once, with
//! only the most recent document state written out.

use super::{Storage, StorageResult};
use crate::canvas::CanvasDocument;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Debounce window for ephemeral edits.
pub const FLUSH_DEBOUNCE: Duration = Duration::from_millis(100);

/// How urgently an edit needs to reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    /// Flush on the next poll.
    Durable,
    /// Coalesce within the debounce window; only the trailing state commits.
    Ephemeral,
}

/// Schedules flushes. The clock is passed in so behavior is testable.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    debounce: Duration,
    deadline: Option<Instant>,
}

impl SaveScheduler {
    /// Create a scheduler with the default debounce window.
    pub fn new() -> Self {
        Self::with_debounce(FLUSH_DEBOUNCE)
    }

    /// Create a scheduler with a custom debounce window.
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            debounce,
            deadline: None,
        }
    }

    /// Record an edit. A durable request is due immediately and is never
    /// delayed by a pending ephemeral deadline; an ephemeral request replaces
    /// any pending deadline with a new trailing one.
    pub fn request(&mut self, kind: SaveKind, now: Instant) {
        self.deadline = Some(match kind {
            SaveKind::Durable => match self.deadline {
                Some(existing) => existing.min(now),
                None => now,
            },
            SaveKind::Ephemeral => now + self.debounce,
        });
    }

    /// Whether a flush is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending flush if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns a storage backend and a scheduler, writing the whole document on each
/// flush.
pub struct DocumentSaver<S: Storage> {
    storage: Arc<S>,
    scheduler: SaveScheduler,
    doc_id: Option<String>,
}

impl<S: Storage> DocumentSaver<S> {
    /// Create a saver over the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            scheduler: SaveScheduler::new(),
            doc_id: None,
        }
    }

    /// Set the document ID to save under (defaults to the document's own ID).
    pub fn set_document_id(&mut self, id: Option<String>) {
        self.doc_id = id;
    }

    /// Record that the document changed.
    pub fn mark_changed(&mut self, kind: SaveKind) {
        self.scheduler.request(kind, Instant::now());
    }

    /// Whether a flush is scheduled.
    pub fn has_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Flush if a request is due. Returns true when a save was performed.
    pub fn maybe_flush(&mut self, document: &CanvasDocument) -> StorageResult<bool> {
        if !self.scheduler.take_due(Instant::now()) {
            return Ok(false);
        }
        self.flush(document)?;
        Ok(true)
    }

    /// Force save the document immediately.
    pub fn flush(&mut self, document: &CanvasDocument) -> StorageResult<()> {
        let id = self.doc_id.clone().unwrap_or_else(|| document.id.clone());
        self.storage.save(&id, document)?;
        log::debug!("flushed document {}", id);
        Ok(())
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

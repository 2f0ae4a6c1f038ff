//! Process-local metrics.
//!
//! Counters for the contact and image workflows. The `cleanup_failures`
//! counter exists because blob-deletion failures during contact deletion are
//! swallowed on purpose; this is where they stay visible to operators.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counter set shared across services.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    contacts_created: Arc<AtomicU64>,
    contacts_edited: Arc<AtomicU64>,
    contacts_deleted: Arc<AtomicU64>,
    images_stored: Arc<AtomicU64>,
    cleanup_failures: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_contact_created(&self) {
        self.contacts_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_edited(&self) {
        self.contacts_edited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.contacts_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_image_stored(&self) {
        self.images_stored.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a swallowed blob cleanup failure.
    pub fn record_cleanup_failure(&self) {
        self.cleanup_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_created(&self) -> u64 {
        self.contacts_created.load(Ordering::Relaxed)
    }

    pub fn contacts_edited(&self) -> u64 {
        self.contacts_edited.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted(&self) -> u64 {
        self.contacts_deleted.load(Ordering::Relaxed)
    }

    pub fn images_stored(&self) -> u64 {
        self.images_stored.load(Ordering::Relaxed)
    }

    pub fn cleanup_failures(&self) -> u64 {
        self.cleanup_failures.load(Ordering::Relaxed)
    }
}

//! Rule store with atomic snapshot publication.
//!
//! Readers pin an `Arc<RuleTable>` and resolve against that immutable view;
//! they never take a lock. Writers build a replacement table elsewhere and
//! publish it with a single reference swap, so a reader sees either the old
//! table or the new one in full. Publication is serialized by a mutex that
//! covers the release comparison, the swap and any post-publication hook.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::table::RuleTable;

/// Holder of the currently active rule table
pub struct RuleStore {
    current: ArcSwap<RuleTable>,
    publish_lock: Mutex<()>,
}

impl RuleStore {
    /// Create a store with an initial table
    pub fn new(table: RuleTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
            publish_lock: Mutex::new(()),
        }
    }

    /// Snapshot of the active table
    pub fn current(&self) -> Arc<RuleTable> {
        self.current.load_full()
    }

    /// Release tag of the active table
    pub fn release(&self) -> String {
        self.current.load().release().to_string()
    }

    /// Whether publishing a table tagged `release` would replace the active one
    pub fn needs_update(&self, release: &str) -> bool {
        !release.is_empty() && self.current.load().release() != release
    }

    /// Publish `table` as the active table.
    ///
    /// Returns false without touching the store when the table carries an
    /// empty release or the release already published.
    pub fn publish(&self, table: RuleTable) -> bool {
        matches!(self.publish_with(table, |_| Ok(())), Ok(true))
    }

    /// Publish `table`, then run `after` on it before any other publisher
    /// can swap the store.
    ///
    /// `after` only runs when the table was published. Its error is returned
    /// as is; the published table stays active.
    pub fn publish_with<F>(&self, table: RuleTable, after: F) -> Result<bool>
    where
        F: FnOnce(&RuleTable) -> Result<()>,
    {
        let _lock = self.publish_lock.lock();

        if !self.needs_update(table.release()) {
            debug!(release = table.release(), "skipping publication of known release");
            return Ok(false);
        }

        info!(
            release = table.release(),
            rules = table.rule_count(),
            "publishing public suffix rule table"
        );
        let table = Arc::new(table);
        self.current.store(Arc::clone(&table));
        after(&table)?;
        Ok(true)
    }

    /// Publish `table` unconditionally, e.g. when restoring a snapshot.
    pub fn replace(&self, table: RuleTable) {
        let _lock = self.publish_lock.lock();
        debug!(release = table.release(), "replacing public suffix rule table");
        self.current.store(Arc::new(table));
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new(RuleTable::default())
    }
}

impl std::fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleStore")
            .field("release", &self.current.load().release())
            .finish()
    }
}

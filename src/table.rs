//! Immutable rule table.
//!
//! A `RuleTable` maps a rule signature (its labels with the separators
//! removed) to every rule sharing that signature, in source order. Distinct
//! rules may collide on one signature (`i.ng` and `ing`), so entries are
//! never collapsed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Rule;

/// Signature-indexed rule table identified by a release tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    index: HashMap<String, Vec<Rule>>,
    release: String,
}

impl RuleTable {
    /// Create a table from an already-built index
    pub fn new(index: HashMap<String, Vec<Rule>>, release: impl Into<String>) -> Self {
        Self {
            index,
            release: release.into(),
        }
    }

    /// Create an empty table with the given release tag
    pub fn empty(release: impl Into<String>) -> Self {
        Self::new(HashMap::new(), release)
    }

    /// All rules stored under `signature`, in source order
    pub fn rules(&self, signature: &str) -> Option<&[Rule]> {
        self.index.get(signature).map(Vec::as_slice)
    }

    /// Release tag this table was built from
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Number of distinct signatures
    pub fn signature_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of rules across all signatures
    pub fn rule_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

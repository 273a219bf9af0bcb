//! Public suffix list facade.
//!
//! Ties the rule store, query normalization, updates and snapshots together.
//! All methods take `&self` and are safe to call from any number of threads.

use std::borrow::Cow;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::{DomainErrorKind, PslError, Result};
use crate::matcher;
use crate::parser::{parse_rules, parse_rules_str};
use crate::persist;
use crate::retriever::ListRetriever;
use crate::store::RuleStore;
use crate::table::RuleTable;
use crate::types::SuffixMatch;

/// Public suffix list options.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Lower-case and IDNA-encode queries before resolving
    pub normalize_queries: bool,
    /// Where to save the active table after each successful update
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            normalize_queries: true,
            snapshot_path: None,
        }
    }
}

impl ListOptions {
    /// Create new list options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable query normalization.
    pub fn with_normalize_queries(mut self, normalize: bool) -> Self {
        self.normalize_queries = normalize;
        self
    }

    /// Set the snapshot path.
    pub fn with_snapshot_path(mut self, path: impl AsRef<Path>) -> Self {
        self.snapshot_path = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Queryable public suffix list backed by a swappable rule table.
#[derive(Debug)]
pub struct PublicSuffixList {
    store: RuleStore,
    options: ListOptions,
}

impl PublicSuffixList {
    /// Create a list serving `table`.
    pub fn new(table: RuleTable) -> Self {
        Self::with_options(table, ListOptions::default())
    }

    /// Create a list serving `table` with explicit options.
    pub fn with_options(table: RuleTable, options: ListOptions) -> Self {
        Self {
            store: RuleStore::new(table),
            options,
        }
    }

    /// Create a list from raw list text.
    pub fn from_rules(text: &str, release: &str) -> Result<Self> {
        Ok(Self::new(parse_rules_str(text, release)?))
    }

    /// Create a list from the configured snapshot, or from `fallback` when
    /// no snapshot path is set or no snapshot has been saved yet.
    pub fn open(options: ListOptions, fallback: RuleTable) -> Result<Self> {
        let table = match options.snapshot_path {
            Some(ref path) if path.exists() => persist::load_from_file(path)?,
            _ => fallback,
        };
        debug!(release = table.release(), "opened public suffix list");
        Ok(Self::with_options(table, options))
    }

    /// Resolve the public suffix of `domain`.
    ///
    /// Never fails: malformed input degrades to a `found == false` result.
    pub fn resolve<'a>(&self, domain: &'a str) -> SuffixMatch<'a> {
        if domain.is_empty() || domain.ends_with('.') {
            return SuffixMatch::none();
        }

        let table = self.store.current();
        match self.normalize(domain) {
            Some(Cow::Borrowed(domain)) => matcher::search(&table, domain),
            Some(Cow::Owned(domain)) => matcher::search(&table, &domain).into_owned(),
            None => SuffixMatch::none(),
        }
    }

    /// Public suffix of `domain` and whether it is ICANN managed.
    ///
    /// foo.org and foo.co.uk are ICANN domains, foo.dyndns.org and
    /// foo.blogspot.co.uk are private domains.
    pub fn public_suffix(&self, domain: &str) -> (String, bool) {
        let found = self.resolve(domain);
        (found.suffix.into_owned(), found.icann)
    }

    /// Whether an explicit rule covers `domain`.
    pub fn has_public_suffix(&self, domain: &str) -> bool {
        self.resolve(domain).found
    }

    /// Public suffix plus one more label.
    pub fn effective_tld_plus_one(&self, domain: &str) -> Result<String> {
        let table = self.store.current();
        match self.normalize(domain) {
            Some(normalized) => {
                matcher::effective_tld_plus_one(&table, &normalized).map(str::to_string)
            }
            None => Err(PslError::InvalidDomain {
                kind: DomainErrorKind::NotConvertible,
                domain: domain.to_string(),
                suffix: String::new(),
            }),
        }
    }

    /// Release of the active table.
    pub fn release(&self) -> String {
        self.store.release()
    }

    /// Snapshot of the active table.
    pub fn current(&self) -> Arc<RuleTable> {
        self.store.current()
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Update the active table from `retriever`.
    ///
    /// Returns `Ok(false)` when the retriever offers an empty release or the
    /// release already active. A failed fetch or build leaves the active table
    /// untouched. A failed snapshot save is reported after the new table has
    /// been published.
    pub fn update(&self, retriever: &dyn ListRetriever) -> Result<bool> {
        let release = retriever.latest_release()?;
        if !self.store.needs_update(&release) {
            debug!(release = %release, "public suffix list already up to date");
            return Ok(false);
        }

        let reader = retriever.fetch_list(&release)?;
        let table = parse_rules(reader, &release).map_err(|e| {
            warn!(release = %release, error = %e, "failed to build public suffix list");
            e
        })?;

        // The saved snapshot always matches the live table
        self.store.publish_with(table, |table| match self.options.snapshot_path {
            Some(ref path) => persist::save_to_file(table, path),
            None => Ok(()),
        })
    }

    /// Write the active table as JSON.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        persist::write_json(&self.store.current(), writer)
    }

    /// Load a table written by [`PublicSuffixList::write`] and serve it.
    pub fn read<R: Read>(&self, reader: R) -> Result<()> {
        let table = persist::read_json(reader)?;
        self.store.replace(table);
        Ok(())
    }

    /// Bring a query into the canonical form rules are stored in.
    fn normalize<'a>(&self, domain: &'a str) -> Option<Cow<'a, str>> {
        if !self.options.normalize_queries {
            return Some(Cow::Borrowed(domain));
        }

        if domain.is_ascii() {
            // Only allocate when uppercase bytes are present
            if domain.bytes().any(|b| b.is_ascii_uppercase()) {
                return Some(Cow::Owned(domain.to_ascii_lowercase()));
            }
            return Some(Cow::Borrowed(domain));
        }

        match idna::domain_to_ascii(domain) {
            Ok(ascii) => Some(Cow::Owned(ascii)),
            Err(e) => {
                trace!(domain, error = ?e, "query is not convertible to ASCII");
                None
            }
        }
    }
}

//! Cookie-jar adapter.

use std::fmt;
use std::sync::Arc;

use crate::list::PublicSuffixList;

/// Trait for cookie-scoping policies that need the public suffix of a domain
pub trait PublicSuffixProvider: Send + Sync {
    /// Public suffix of `domain`
    fn public_suffix(&self, domain: &str) -> String;
}

/// [`PublicSuffixProvider`] backed by a shared [`PublicSuffixList`].
///
/// Its `Display` names the active release, so rotating the list through
/// updates is visible to whoever logs the provider.
#[derive(Debug, Clone)]
pub struct CookieJarList {
    list: Arc<PublicSuffixList>,
}

impl CookieJarList {
    pub fn new(list: Arc<PublicSuffixList>) -> Self {
        Self { list }
    }
}

impl PublicSuffixProvider for CookieJarList {
    fn public_suffix(&self, domain: &str) -> String {
        self.list.resolve(domain).suffix.into_owned()
    }
}

impl fmt::Display for CookieJarList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "publicsuffix.org's public_suffix_list.dat, git revision: {}",
            self.list.current().release()
        )
    }
}

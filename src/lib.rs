//! PSL Engine - A high-performance public suffix list engine for Rust
//!
//! This library answers, for any domain name, which trailing labels form its
//! public suffix and whether that suffix is ICANN managed or privately
//! delegated:
//! - Rule table compilation from `public_suffix_list.dat` text
//! - Normal, wildcard (`*.`) and exception (`!`) rule precedence
//! - Registrable domain (eTLD+1) derivation
//! - Lock-free lookups against an atomically swappable rule table
//! - JSON snapshots of the active table
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{PublicSuffixList, MemoryListRetriever};
//!
//! let rules_text = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! *.kobe.jp
//! !city.kobe.jp
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.co.uk
//! ";
//!
//! let list = PublicSuffixList::from_rules(rules_text, "initial").unwrap();
//!
//! assert_eq!(list.public_suffix("www.example.co.uk"), ("co.uk".to_string(), true));
//! assert_eq!(list.public_suffix("foo.blogspot.co.uk"), ("blogspot.co.uk".to_string(), false));
//! assert_eq!(list.public_suffix("c.kobe.jp").0, "c.kobe.jp");
//! assert_eq!(list.public_suffix("city.kobe.jp").0, "kobe.jp");
//! assert_eq!(list.effective_tld_plus_one("www.example.co.uk").unwrap(), "example.co.uk");
//!
//! // Swap in a newer release without blocking readers
//! let retriever = MemoryListRetriever::new("next", "com\n");
//! assert!(list.update(&retriever).unwrap());
//! assert_eq!(list.release(), "next");
//! ```
//!
//! # Rule Syntax
//!
//! | Type | Example | Public suffix |
//! |------|---------|---------------|
//! | Normal | `co.uk` | `co.uk` |
//! | Wildcard | `*.kobe.jp` | `c.kobe.jp` for `www.c.kobe.jp` |
//! | Exception | `!city.kobe.jp` | `kobe.jp` for `www.city.kobe.jp` |
//!
//! Lines starting with `//` are comments. Rules between `BEGIN ICANN DOMAINS`
//! and `END ICANN DOMAINS` markers are flagged as ICANN rules. When no rule
//! matches, the implicit `*` rule makes the last label the public suffix.

pub mod cookie;
pub mod error;
pub mod list;
pub mod matcher;
pub mod parser;
pub mod persist;
pub mod retriever;
pub mod store;
pub mod table;
pub mod types;

// Re-export commonly used items
pub use cookie::{CookieJarList, PublicSuffixProvider};
pub use error::{DomainErrorKind, PslError, Result, RetrieverErrorKind};
pub use list::{ListOptions, PublicSuffixList};
pub use matcher::{decompose, effective_tld_plus_one, search, Subdomain};
pub use parser::{parse_rules, parse_rules_from_file, parse_rules_str};
pub use persist::{load_from_file, read_json, save_to_file, write_json};
pub use retriever::{FileListRetriever, ListRetriever, MemoryListRetriever};
pub use store::RuleStore;
pub use table::RuleTable;
pub use types::{Rule, RuleType, SuffixMatch};

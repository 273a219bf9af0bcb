use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Rule classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Literal rule, e.g. `co.uk`
    Normal,
    /// Wildcard rule, e.g. `*.kobe.jp`
    Wildcard,
    /// Exception rule, e.g. `!city.kobe.jp`
    Exception,
}

/// A single public suffix rule.
///
/// `dotted_name` is stored in canonical ASCII form without its `*.` or `!`
/// marker; the marker is carried by `rule_type` instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Canonical dotted name without classification marker
    pub dotted_name: String,
    /// Rule classification
    pub rule_type: RuleType,
    /// Whether the rule comes from the ICANN section of the list
    pub icann: bool,
}

impl Rule {
    /// Create a rule from its already-stripped dotted name
    pub fn new(dotted_name: impl Into<String>, rule_type: RuleType, icann: bool) -> Self {
        Self {
            dotted_name: dotted_name.into(),
            rule_type,
            icann,
        }
    }

    /// Number of labels the rule spans, counting the wildcard label.
    pub fn levels(&self) -> usize {
        let labels = if self.dotted_name.is_empty() {
            0
        } else {
            self.dotted_name.bytes().filter(|&b| b == b'.').count() + 1
        };
        match self.rule_type {
            RuleType::Wildcard => labels + 1,
            RuleType::Normal | RuleType::Exception => labels,
        }
    }

    /// Length of the rule as written in the source list, marker included.
    pub fn source_len(&self) -> usize {
        match self.rule_type {
            RuleType::Normal => self.dotted_name.len(),
            RuleType::Exception => self.dotted_name.len() + 1,
            RuleType::Wildcard if self.dotted_name.is_empty() => 1,
            RuleType::Wildcard => self.dotted_name.len() + 2,
        }
    }
}

/// Outcome of a suffix lookup.
///
/// `found == false` is a normal result: the implicit `*` rule applied, or the
/// domain could not be decomposed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    /// The public suffix of the queried domain
    pub suffix: Cow<'a, str>,
    /// Whether the matching rule is ICANN managed
    pub icann: bool,
    /// Whether an explicit rule matched
    pub found: bool,
}

impl<'a> SuffixMatch<'a> {
    /// Result for domains that cannot carry a suffix (empty, trailing dot)
    pub fn none() -> Self {
        Self {
            suffix: Cow::Borrowed(""),
            icann: false,
            found: false,
        }
    }

    /// Result of the implicit `*` rule: the last label of the domain
    pub fn default_rule(domain: &'a str) -> Self {
        let start = domain.rfind('.').map_or(0, |dot| dot + 1);
        Self {
            suffix: Cow::Borrowed(&domain[start..]),
            icann: false,
            found: false,
        }
    }

    pub fn into_owned(self) -> SuffixMatch<'static> {
        SuffixMatch {
            suffix: Cow::Owned(self.suffix.into_owned()),
            icann: self.icann,
            found: self.found,
        }
    }
}

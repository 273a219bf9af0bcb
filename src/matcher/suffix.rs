//! Suffix resolution against a rule table.
//!
//! Levels are probed from the most specific (full domain) to the least
//! specific (last label); the first level with an applicable rule wins.
//! Rules sharing a signature are tried in source order and the first one
//! whose dotted name is actually contained in the level applies.

use std::borrow::Cow;

use crate::error::{DomainErrorKind, PslError, Result};
use crate::table::RuleTable;
use crate::types::{Rule, RuleType, SuffixMatch};

use super::decompose::{decompose, Subdomain};

/// Find the public suffix of `domain` in `table`.
///
/// `domain` must already be normalized (lower-case ASCII, Punycode labels).
/// The returned suffix is always a suffix of `domain`.
pub fn search<'d>(table: &RuleTable, domain: &'d str) -> SuffixMatch<'d> {
    // Without a trailing label there is nothing to decompose
    if domain.is_empty() || domain.ends_with('.') {
        return SuffixMatch::none();
    }

    let decomposition = decompose(domain);
    for sub in &decomposition {
        let Some(rules) = table.rules(sub.signature) else {
            continue;
        };

        for rule in rules {
            if let Some(found) = apply_rule(rule, &sub, domain) {
                return found;
            }
        }
    }

    // Implicit "*" rule
    SuffixMatch::default_rule(domain)
}

/// Evaluate one candidate rule at one decomposition level.
fn apply_rule<'d>(rule: &Rule, sub: &Subdomain<'_>, domain: &'d str) -> Option<SuffixMatch<'d>> {
    if !sub.dotted.ends_with(rule.dotted_name.as_str()) {
        return None;
    }

    let suffix_len = match rule.rule_type {
        RuleType::Exception => {
            // Drop the leftmost label of the excepted name
            let name = rule.dotted_name.as_str();
            name.find('.').map_or(0, |dot| name.len() - dot - 1)
        }
        RuleType::Wildcard => {
            if domain.len() < rule.source_len() {
                // ".ck" against "*.ck": empty wildcard label, the domain itself
                if domain.strip_prefix('.') == Some(rule.dotted_name.as_str()) {
                    return Some(found(rule, Cow::Borrowed(domain)));
                }
                return None;
            }
            domain.len() - wildcard_split(domain, rule.levels())
        }
        RuleType::Normal => rule.dotted_name.len(),
    };

    Some(found(rule, Cow::Borrowed(&domain[domain.len() - suffix_len..])))
}

/// Byte offset where the last `levels` labels of `domain` begin.
fn wildcard_split(domain: &str, levels: usize) -> usize {
    let bytes = domain.as_bytes();
    let mut dot = Some(bytes.len().saturating_sub(1));

    for _ in 0..levels {
        match dot {
            Some(end) => dot = bytes[..end].iter().rposition(|&b| b == b'.'),
            None => break,
        }
    }

    dot.map_or(0, |d| d + 1)
}

fn found<'d>(rule: &Rule, suffix: Cow<'d, str>) -> SuffixMatch<'d> {
    SuffixMatch {
        suffix,
        icann: rule.icann,
        found: true,
    }
}

/// Registrable domain of `domain`: its public suffix plus one more label.
///
/// For example, the eTLD+1 of `foo.bar.golang.org` is `golang.org`.
pub fn effective_tld_plus_one<'d>(table: &RuleTable, domain: &'d str) -> Result<&'d str> {
    let suffix_len = search(table, domain).suffix.len();

    if domain.len() <= suffix_len {
        return Err(invalid_domain(DomainErrorKind::TooShort, domain, suffix_len));
    }

    let bytes = domain.as_bytes();
    let sep = domain.len() - suffix_len - 1;
    if bytes[sep] != b'.' {
        return Err(invalid_domain(
            DomainErrorKind::BadSeparator,
            domain,
            suffix_len,
        ));
    }

    let start = bytes[..sep]
        .iter()
        .rposition(|&b| b == b'.')
        .map_or(0, |dot| dot + 1);

    Ok(&domain[start..])
}

fn invalid_domain(kind: DomainErrorKind, domain: &str, suffix_len: usize) -> PslError {
    PslError::InvalidDomain {
        kind,
        domain: domain.to_string(),
        suffix: domain[domain.len() - suffix_len..].to_string(),
    }
}

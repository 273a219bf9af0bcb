use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{PslError, Result};
use crate::table::RuleTable;
use crate::types::{Rule, RuleType};

/// Canonical form of a list entry after Punycode conversion.
/// Capital letters are not allowed.
static VALID_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_!*\-.]+$").expect("VALID_SUFFIX: hardcoded regex is invalid")
});

/// Marks the beginning of the ICANN section of the list.
const ICANN_BEGIN: &str = "BEGIN ICANN DOMAINS";

/// Marks the end of the ICANN section of the list.
const ICANN_END: &str = "END ICANN DOMAINS";

/// Build a rule table from a public suffix list text stream.
///
/// The build is all-or-nothing: the first malformed line aborts it and no
/// table is returned.
pub fn parse_rules<R: BufRead>(reader: R, release: &str) -> Result<RuleTable> {
    let mut icann = false;
    let mut index: HashMap<String, Vec<Rule>> = HashMap::new();
    let mut rule_count = 0usize;

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line?;
        let line = line.trim();

        // Section markers live inside comment lines
        if line.contains(ICANN_BEGIN) {
            icann = true;
            continue;
        }
        if line.contains(ICANN_END) {
            icann = false;
            continue;
        }

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let ascii = to_ascii(line, line_num)?;
        if !VALID_SUFFIX.is_match(&ascii) {
            return Err(PslError::ParseErrorAtLine {
                line: line_num,
                message: format!("bad publicsuffix.org list data: {:?}", ascii),
            });
        }

        let (signature, rule) = classify(&ascii, icann);
        index.entry(signature).or_default().push(rule);
        rule_count += 1;
    }

    debug!(
        release,
        rules = rule_count,
        signatures = index.len(),
        "built public suffix rule table"
    );

    Ok(RuleTable::new(index, release))
}

/// Build a rule table from in-memory list text.
pub fn parse_rules_str(text: &str, release: &str) -> Result<RuleTable> {
    parse_rules(text.as_bytes(), release)
}

/// Build a rule table from a public suffix list file.
pub fn parse_rules_from_file(path: impl AsRef<Path>, release: &str) -> Result<RuleTable> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| {
        PslError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read list file '{}': {}", path.display(), e),
        ))
    })?;
    parse_rules(BufReader::new(file), release)
}

/// Punycode-encode non-ASCII entries. ASCII entries pass through untouched so
/// that upper-case input is still rejected by the canonical-form check.
fn to_ascii(line: &str, line_num: usize) -> Result<Cow<'_, str>> {
    if line.is_ascii() {
        return Ok(Cow::Borrowed(line));
    }
    idna::domain_to_ascii(line)
        .map(Cow::Owned)
        .map_err(|_| PslError::IdnaError {
            line: line_num,
            message: format!("invalid IDNA label in {:?}", line),
        })
}

/// Split a canonical entry into its index signature and classified rule.
fn classify(line: &str, icann: bool) -> (String, Rule) {
    let signature: String = line.chars().filter(|&c| c != '.').collect();
    let name = line.trim_start_matches('.');

    if let Some(signature) = signature.strip_prefix('*') {
        let rest = name.strip_prefix('*').unwrap_or(name);
        let dotted = rest.strip_prefix('.').unwrap_or(rest);
        (
            signature.to_string(),
            Rule::new(dotted, RuleType::Wildcard, icann),
        )
    } else if let Some(signature) = signature.strip_prefix('!') {
        let dotted = name.strip_prefix('!').unwrap_or(name);
        (
            signature.to_string(),
            Rule::new(dotted, RuleType::Exception, icann),
        )
    } else {
        (signature, Rule::new(line, RuleType::Normal, icann))
    }
}

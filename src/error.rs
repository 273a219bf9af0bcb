use thiserror::Error;

/// Classifies registrable-domain derivation failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainErrorKind {
    /// Domain is not longer than its own public suffix
    TooShort,
    /// The byte preceding the suffix is not a label separator
    BadSeparator,
    /// The domain could not be converted to ASCII
    NotConvertible,
}

/// Classifies rule-list source errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrieverErrorKind {
    /// The latest release tag could not be determined
    ReleaseUnavailable,
    /// The rule list for a release could not be obtained
    ListUnavailable,
}

/// Public suffix engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("IDNA error at line {line}: {message}")]
    IdnaError { line: usize, message: String },

    #[error("Invalid domain {domain:?}: {kind:?} (public suffix {suffix:?})")]
    InvalidDomain {
        kind: DomainErrorKind,
        domain: String,
        suffix: String,
    },

    #[error("Retriever error: {message}")]
    Retriever {
        kind: RetrieverErrorKind,
        message: String,
    },

    #[error("Persist error: {0}")]
    PersistError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PslError {
    /// Returns true for errors raised while building a rule table.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PslError::ParseErrorAtLine { .. } | PslError::IdnaError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PslError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a formula evaluation or a table build can fail.
///
/// Every variant identifies the header entry that triggered it, where there is one.
/// A failed build never yields a partial table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("duplicate header entry '{entry}'")]
    DuplicateHeaderEntry { entry: String },

    #[error("unresolved reference '{token}' in formula '{formula}'")]
    UnresolvedReference { formula: String, token: String },

    #[error("malformed formula '{formula}': {reason}")]
    MalformedFormula { formula: String, reason: String },

    #[error("{count} atomic variables exceed the maximum of {max}")]
    VariableCountOverflow { count: usize, max: usize },
}

impl Error {
    pub(crate) fn malformed(formula: &str, reason: impl Into<String>) -> Self {
        Self::MalformedFormula {
            formula: formula.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unresolved(formula: &str, token: &str) -> Self {
        Self::UnresolvedReference {
            formula: formula.to_string(),
            token: token.to_string(),
        }
    }
}

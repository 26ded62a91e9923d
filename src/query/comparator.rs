use crate::error::ValidationError;
use derive_more::Display;
use std::str::FromStr;

/// The comparators allowed in the writing-system age predicate. `Display`
/// yields the SQL token.
///
/// Comparators cannot be bind parameters, so the token is spliced into the SQL
/// text; only values of this enum ever reach that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Comparator {
    #[display("<")]
    Lt,
    #[display("<=")]
    Le,
    #[default]
    #[display("=")]
    Eq,
    #[display(">=")]
    Ge,
    #[display(">")]
    Gt,
}

impl Comparator {
    pub const ALL: [Comparator; 5] = [
        Comparator::Lt,
        Comparator::Le,
        Comparator::Eq,
        Comparator::Ge,
        Comparator::Gt,
    ];

    /// Exact match against the displayed SQL token, surrounding whitespace
    /// ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        Self::ALL.into_iter().find(|c| c.to_string() == token)
    }
}

/// What to do with a comparator outside the allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorPolicy {
    /// Replace it with `=` and carry on.
    #[default]
    Substitute,
    /// Refuse the request.
    Reject,
}

impl ComparatorPolicy {
    /// A missing or empty comparator is always `=`.
    pub fn resolve(&self, raw: Option<&str>) -> Result<Comparator, ValidationError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(Comparator::Eq),
            Some(raw) => raw,
        };

        match (Comparator::parse(raw), self) {
            (Some(comparator), _) => Ok(comparator),
            (None, ComparatorPolicy::Substitute) => {
                tracing::warn!(comparator = raw, "unknown comparator, substituting '='");
                Ok(Comparator::Eq)
            }
            (None, ComparatorPolicy::Reject) => {
                Err(ValidationError::UnknownComparator(raw.to_string()))
            }
        }
    }
}

impl FromStr for ComparatorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substitute" => Ok(ComparatorPolicy::Substitute),
            "reject" => Ok(ComparatorPolicy::Reject),
            other => anyhow::bail!("expected 'substitute' or 'reject', got '{}'", other),
        }
    }
}

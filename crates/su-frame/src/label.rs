//! Row labels.

use std::fmt;

/// A row label supplied by the host. Extension arrays never store these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl Label {
    /// Default positional labels `0..len`.
    pub fn range(len: usize) -> Vec<Label> {
        (0..len as i64).map(Label::Int).collect()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

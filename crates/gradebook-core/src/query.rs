//! Shared query parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::Diagnostic;

/// How many students a filter or order query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Take {
    /// Every matching student.
    #[default]
    All,
    /// At most this many; `0` yields nothing.
    Count(usize),
}

impl Take {
    /// Apply the limit to an iterator.
    pub fn apply<I: Iterator>(self, iter: I) -> std::iter::Take<I> {
        match self {
            Take::All => iter.take(usize::MAX),
            Take::Count(n) => iter.take(n),
        }
    }
}

impl From<Option<usize>> for Take {
    fn from(count: Option<usize>) -> Self {
        count.map_or(Take::All, Take::Count)
    }
}

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Take::All => write!(f, "all"),
            Take::Count(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Take {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Take::All);
        }
        s.parse()
            .map(Take::Count)
            .map_err(|_| Diagnostic::InvalidTakeCount(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};

/// Where a predicate's logic lives.
///
/// Compiled predicates report [`Native`](Self::Native); instances wrapping
/// logic supplied at runtime (for example through an embedded scripting
/// facility) report [`External`](Self::External). The evaluation contract
/// is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backing {
    /// Logic is part of the statically compiled predicate set.
    Native,
    /// Logic is supplied at runtime behind an opaque context and dispatch
    /// thunk.
    External,
}

impl Backing {
    /// Return the `snake_case` string representation (matches serde
    /// serialization).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::External => "external",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_as_str() {
        assert_eq!(Backing::Native.as_str(), "native");
        assert_eq!(Backing::External.as_str(), "external");
    }
}

use inkline_viewmap::{CurveElement, ElementIterator};

use crate::binary::BinaryPredicate;
use crate::error::EvalError;
use crate::unary::UnaryPredicate;

/// Unary predicate that is `true` at any position.
///
/// Ignores the iterator entirely, so it succeeds even on a past-the-end
/// cursor. Neutral element of [`And`](crate::combinator::And) and a handy
/// test fixture.
#[derive(Debug, Default)]
pub struct AlwaysTrue {
    result: Option<bool>,
}

impl AlwaysTrue {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnaryPredicate for AlwaysTrue {
    fn name(&self) -> &str {
        "AlwaysTrue"
    }

    fn evaluate(&mut self, _it: &dyn ElementIterator) -> Result<bool, EvalError> {
        self.result = Some(true);
        Ok(true)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Unary predicate that is `false` at any position.
///
/// Neutral element of [`Or`](crate::combinator::Or).
#[derive(Debug, Default)]
pub struct AlwaysFalse {
    result: Option<bool>,
}

impl AlwaysFalse {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnaryPredicate for AlwaysFalse {
    fn name(&self) -> &str {
        "AlwaysFalse"
    }

    fn evaluate(&mut self, _it: &dyn ElementIterator) -> Result<bool, EvalError> {
        self.result = Some(false);
        Ok(false)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Binary predicate that is `true` for any pair.
#[derive(Debug, Default)]
pub struct AlwaysTrueBinary {
    result: Option<bool>,
}

impl AlwaysTrueBinary {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BinaryPredicate for AlwaysTrueBinary {
    fn name(&self) -> &str {
        "AlwaysTrueBinary"
    }

    fn evaluate(
        &mut self,
        _first: &dyn CurveElement,
        _second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        self.result = Some(true);
        Ok(true)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Binary predicate that is `false` for any pair.
#[derive(Debug, Default)]
pub struct AlwaysFalseBinary {
    result: Option<bool>,
}

impl AlwaysFalseBinary {
    /// Create the predicate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BinaryPredicate for AlwaysFalseBinary {
    fn name(&self) -> &str {
        "AlwaysFalseBinary"
    }

    fn evaluate(
        &mut self,
        _first: &dyn CurveElement,
        _second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        self.result = Some(false);
        Ok(false)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

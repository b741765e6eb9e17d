//! Logical combinators over predicates.
//!
//! Combinators own their children exclusively, forming a tree. `And` and
//! `Or` short-circuit; this is a side-effect-ordering contract, not an
//! optimization, because child predicates may have observable costs that
//! must be avoided once the outcome is decided. A child's failure is
//! returned unchanged, without invoking remaining children.

use inkline_viewmap::{CurveElement, ElementIterator};

use crate::binary::BinaryPredicate;
use crate::error::EvalError;
use crate::unary::UnaryPredicate;

/// Negation of a unary predicate.
pub struct Not {
    inner: Box<dyn UnaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl Not {
    /// Wrap `inner`, negating its outcome.
    pub fn new(inner: Box<dyn UnaryPredicate>) -> Self {
        let name = format!("Not({})", inner.name());
        Self {
            inner,
            name,
            result: None,
        }
    }
}

impl UnaryPredicate for Not {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let value = !self.inner.evaluate(it)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Conjunction of two unary predicates.
///
/// If `left` evaluates `false`, `right` is not invoked.
pub struct And {
    left: Box<dyn UnaryPredicate>,
    right: Box<dyn UnaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl And {
    /// Combine `left` and `right`.
    pub fn new(left: Box<dyn UnaryPredicate>, right: Box<dyn UnaryPredicate>) -> Self {
        let name = format!("And({}, {})", left.name(), right.name());
        Self {
            left,
            right,
            name,
            result: None,
        }
    }
}

impl UnaryPredicate for And {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let value = self.left.evaluate(it)? && self.right.evaluate(it)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Disjunction of two unary predicates.
///
/// If `left` evaluates `true`, `right` is not invoked.
pub struct Or {
    left: Box<dyn UnaryPredicate>,
    right: Box<dyn UnaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl Or {
    /// Combine `left` and `right`.
    pub fn new(left: Box<dyn UnaryPredicate>, right: Box<dyn UnaryPredicate>) -> Self {
        let name = format!("Or({}, {})", left.name(), right.name());
        Self {
            left,
            right,
            name,
            result: None,
        }
    }
}

impl UnaryPredicate for Or {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        let value = self.left.evaluate(it)? || self.right.evaluate(it)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Negation of a binary predicate, applied to the same argument pair.
pub struct NotBinary {
    inner: Box<dyn BinaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl NotBinary {
    /// Wrap `inner`, negating its outcome.
    pub fn new(inner: Box<dyn BinaryPredicate>) -> Self {
        let name = format!("NotBinary({})", inner.name());
        Self {
            inner,
            name,
            result: None,
        }
    }
}

impl BinaryPredicate for NotBinary {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value = !self.inner.evaluate(first, second)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Conjunction of two binary predicates over the same argument pair.
pub struct AndBinary {
    left: Box<dyn BinaryPredicate>,
    right: Box<dyn BinaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl AndBinary {
    /// Combine `left` and `right`.
    pub fn new(left: Box<dyn BinaryPredicate>, right: Box<dyn BinaryPredicate>) -> Self {
        let name = format!("AndBinary({}, {})", left.name(), right.name());
        Self {
            left,
            right,
            name,
            result: None,
        }
    }
}

impl BinaryPredicate for AndBinary {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value = self.left.evaluate(first, second)? && self.right.evaluate(first, second)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

/// Disjunction of two binary predicates over the same argument pair.
pub struct OrBinary {
    left: Box<dyn BinaryPredicate>,
    right: Box<dyn BinaryPredicate>,
    name: String,
    result: Option<bool>,
}

impl OrBinary {
    /// Combine `left` and `right`.
    pub fn new(left: Box<dyn BinaryPredicate>, right: Box<dyn BinaryPredicate>) -> Self {
        let name = format!("OrBinary({}, {})", left.name(), right.name());
        Self {
            left,
            right,
            name,
            result: None,
        }
    }
}

impl BinaryPredicate for OrBinary {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let value = self.left.evaluate(first, second)? || self.right.evaluate(first, second)?;
        self.result = Some(value);
        Ok(value)
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }
}

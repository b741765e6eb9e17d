use inkline_viewmap::ElementIterator;

use crate::backing::Backing;
use crate::error::EvalError;

/// A boolean condition testable at a single traversal position.
///
/// A unary predicate is evaluated against an [`ElementIterator`] positioned
/// on one point of a feature curve. Evaluation stores the outcome in the
/// instance's cached last-result field and returns it; the cache serves rule
/// consumers that read the outcome after the call rather than from the
/// return value.
///
/// Implementations must not mutate the element or iterator they inspect:
/// for a fixed traversal state, repeated evaluation yields the same outcome
/// and the same cached result.
///
/// Instances are stateful (the result cache) and carry no internal locking,
/// so they must be pass-local or held exclusively per traversal pass.
pub trait UnaryPredicate: Send {
    /// Stable human-readable identity for diagnostics and rule tracing.
    /// Every concrete variant overrides this.
    fn name(&self) -> &str {
        "UnaryPredicate"
    }

    /// Evaluate the condition at the iterator's current position.
    ///
    /// The iterator must be dereferenceable. Predicates that inspect it
    /// return [`EvalError::InvalidIterator`] on a past-the-end cursor
    /// rather than fabricating an outcome; predicates that ignore their
    /// argument (the constants) succeed regardless.
    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError>;

    /// Outcome of the most recent successful evaluation.
    ///
    /// `None` until the first successful call. A failed evaluation leaves
    /// the previous value in place.
    fn last_result(&self) -> Option<bool>;

    /// Whether this predicate's logic is compiled in or supplied at
    /// runtime.
    fn backing(&self) -> Backing {
        Backing::Native
    }
}

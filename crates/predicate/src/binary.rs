use inkline_viewmap::CurveElement;

use crate::backing::Backing;
use crate::error::EvalError;

/// A boolean relation between two curve elements.
///
/// Binary predicates are typically ordering relations ("closer to the
/// viewpoint than", "longer than") and need not be symmetric: swapping the
/// arguments is a distinct evaluation unless the concrete implementation
/// documents symmetry. The framework never normalizes argument order.
///
/// The cached last result and pass-locality rules match
/// [`UnaryPredicate`](crate::unary::UnaryPredicate).
pub trait BinaryPredicate: Send {
    /// Stable human-readable identity for diagnostics and rule tracing.
    /// Every concrete variant overrides this.
    fn name(&self) -> &str {
        "BinaryPredicate"
    }

    /// Evaluate the relation over the ordered pair `(first, second)`.
    ///
    /// Both arguments are borrowed read-only for the duration of the call.
    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError>;

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

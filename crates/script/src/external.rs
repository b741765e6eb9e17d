//! Predicates backed by logic supplied outside the compiled set.
//!
//! An external predicate carries an owned opaque context and a dispatch
//! thunk. The thunk sees the same arguments as a compiled predicate and
//! reports faults through its `Err` channel; panics raised by external
//! logic are caught and converted the same way, so a misbehaving script
//! surfaces as [`EvalError::ExternalFault`] instead of unwinding through
//! the traversal.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::warn;

use inkline_predicate::{Backing, BinaryPredicate, EvalError, UnaryPredicate};
use inkline_viewmap::{CurveElement, ElementIterator};

/// Dispatch thunk for externally supplied unary logic.
///
/// Receives the predicate's opaque context and the iterator under
/// evaluation.
pub type UnaryThunk =
    Box<dyn FnMut(&mut dyn Any, &dyn ElementIterator) -> Result<bool, String> + Send>;

/// Dispatch thunk for externally supplied binary logic.
pub type BinaryThunk = Box<
    dyn FnMut(&mut dyn Any, &dyn CurveElement, &dyn CurveElement) -> Result<bool, String> + Send,
>;

/// A unary predicate whose logic lives outside the compiled set.
pub struct ExternalUnaryPredicate {
    name: String,
    context: Box<dyn Any + Send>,
    thunk: UnaryThunk,
    result: Option<bool>,
}

impl ExternalUnaryPredicate {
    /// Wrap externally supplied logic into an instance satisfying the same
    /// contract as compiled predicates.
    pub fn new(name: impl Into<String>, context: Box<dyn Any + Send>, thunk: UnaryThunk) -> Self {
        Self {
            name: name.into(),
            context,
            thunk,
            result: None,
        }
    }
}

impl UnaryPredicate for ExternalUnaryPredicate {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&mut self, it: &dyn ElementIterator) -> Result<bool, EvalError> {
        if it.at_end() {
            return Err(EvalError::InvalidIterator(format!(
                "'{}' evaluated on a past-the-end cursor",
                self.name
            )));
        }

        let thunk = &mut self.thunk;
        let context = self.context.as_mut();
        let outcome = catch_unwind(AssertUnwindSafe(|| thunk(context, it)));
        match outcome {
            Ok(Ok(value)) => {
                self.result = Some(value);
                Ok(value)
            }
            Ok(Err(message)) => {
                warn!(predicate = %self.name, %message, "external predicate reported a fault");
                Err(external_fault(&self.name, message))
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                warn!(predicate = %self.name, %message, "external predicate panicked");
                Err(external_fault(&self.name, message))
            }
        }
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }

    fn backing(&self) -> Backing {
        Backing::External
    }
}

/// A binary predicate whose logic lives outside the compiled set.
pub struct ExternalBinaryPredicate {
    name: String,
    context: Box<dyn Any + Send>,
    thunk: BinaryThunk,
    result: Option<bool>,
}

impl ExternalBinaryPredicate {
    /// Wrap externally supplied logic into an instance satisfying the same
    /// contract as compiled predicates.
    pub fn new(name: impl Into<String>, context: Box<dyn Any + Send>, thunk: BinaryThunk) -> Self {
        Self {
            name: name.into(),
            context,
            thunk,
            result: None,
        }
    }
}

impl BinaryPredicate for ExternalBinaryPredicate {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        first: &dyn CurveElement,
        second: &dyn CurveElement,
    ) -> Result<bool, EvalError> {
        let thunk = &mut self.thunk;
        let context = self.context.as_mut();
        let outcome = catch_unwind(AssertUnwindSafe(|| thunk(context, first, second)));
        match outcome {
            Ok(Ok(value)) => {
                self.result = Some(value);
                Ok(value)
            }
            Ok(Err(message)) => {
                warn!(predicate = %self.name, %message, "external predicate reported a fault");
                Err(external_fault(&self.name, message))
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                warn!(predicate = %self.name, %message, "external predicate panicked");
                Err(external_fault(&self.name, message))
            }
        }
    }

    fn last_result(&self) -> Option<bool> {
        self.result
    }

    fn backing(&self) -> Backing {
        Backing::External
    }
}

fn external_fault(predicate: &str, message: String) -> EvalError {
    EvalError::ExternalFault {
        predicate: predicate.to_owned(),
        message,
    }
}

/// Best-effort extraction of a panic payload message.
fn panic_message(panic: &dyn Any) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "external logic panicked".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use inkline_viewmap::{PointElement, Polyline, Vec3};

    use super::*;

    fn curve(id: u64) -> Polyline {
        Polyline::new(id, vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)])
    }

    #[test]
    fn external_unary_dispatches_with_its_context() {
        let c = curve(1);
        let it = c.iter();

        // Context: a radius threshold owned by the predicate.
        let mut p = ExternalUnaryPredicate::new(
            "ScriptedRadius",
            Box::new(2.0_f64),
            Box::new(|context, it| {
                let radius = context
                    .downcast_ref::<f64>()
                    .ok_or_else(|| "context is not a radius".to_owned())?;
                let point = it.point().ok_or_else(|| "no point".to_owned())?;
                Ok(point.position().length() <= *radius)
            }),
        );

        assert_eq!(p.backing(), Backing::External);
        assert!(p.evaluate(&it).unwrap());
        assert_eq!(p.last_result(), Some(true));
    }

    #[test]
    fn thunk_error_becomes_external_fault() {
        let c = curve(1);
        let it = c.iter();

        let mut p = ExternalUnaryPredicate::new(
            "Flaky",
            Box::new(()),
            Box::new(|_, _| Err("script raised TypeError".to_owned())),
        );
        let err = p.evaluate(&it).unwrap_err();
        assert_eq!(
            err,
            EvalError::ExternalFault {
                predicate: "Flaky".into(),
                message: "script raised TypeError".into(),
            }
        );
    }

    #[test]
    fn panic_becomes_external_fault() {
        let c = curve(1);
        let it = c.iter();

        let mut p = ExternalUnaryPredicate::new(
            "Panicky",
            Box::new(()),
            Box::new(|_, _| panic!("boom")),
        );
        let err = p.evaluate(&it).unwrap_err();
        assert_eq!(
            err,
            EvalError::ExternalFault {
                predicate: "Panicky".into(),
                message: "boom".into(),
            }
        );
    }

    #[test]
    fn fault_leaves_the_cached_result_unchanged() {
        let c = curve(1);
        let it = c.iter();

        // Succeeds on the first call, faults afterwards.
        let mut p = ExternalUnaryPredicate::new(
            "OnceThenFault",
            Box::new(0_u32),
            Box::new(|context, _| {
                let calls = context
                    .downcast_mut::<u32>()
                    .ok_or_else(|| "bad context".to_owned())?;
                *calls += 1;
                if *calls == 1 {
                    Ok(true)
                } else {
                    Err("exhausted".to_owned())
                }
            }),
        );

        assert!(p.evaluate(&it).unwrap());
        assert_eq!(p.last_result(), Some(true));
        assert!(p.evaluate(&it).is_err());
        // The cache still reflects the last successful outcome.
        assert_eq!(p.last_result(), Some(true));
    }

    #[test]
    fn external_unary_rejects_past_the_end() {
        let empty = Polyline::new(1, vec![]);
        let it = empty.iter();

        let mut p =
            ExternalUnaryPredicate::new("Scripted", Box::new(()), Box::new(|_, _| Ok(true)));
        let err = p.evaluate(&it).unwrap_err();
        assert!(matches!(err, EvalError::InvalidIterator(_)));
        assert_eq!(p.last_result(), None);
    }

    #[test]
    fn external_binary_preserves_argument_order() {
        let a = curve(1);
        let b = curve(2);

        // Relation defined on ids: holds only for (smaller, larger).
        let mut p = ExternalBinaryPredicate::new(
            "IdOrder",
            Box::new(()),
            Box::new(|_, first, second| Ok(first.id() < second.id())),
        );
        assert!(p.evaluate(&a, &b).unwrap());
        assert!(!p.evaluate(&b, &a).unwrap());
        assert_eq!(p.last_result(), Some(false));
    }

    #[test]
    fn external_binary_fault() {
        let a = curve(1);
        let b = curve(2);

        let mut p = ExternalBinaryPredicate::new(
            "BinFlaky",
            Box::new(()),
            Box::new(|_, _, _| Err("no relation".to_owned())),
        );
        let err = p.evaluate(&a, &b).unwrap_err();
        assert_eq!(
            err,
            EvalError::ExternalFault {
                predicate: "BinFlaky".into(),
                message: "no relation".into(),
            }
        );
        assert_eq!(p.last_result(), None);
    }
}

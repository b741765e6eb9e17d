use thiserror::Error;

/// Errors surfaced by predicate evaluation.
///
/// Combinators never wrap these: a combinator's failure is exactly its
/// failing child's error, so diagnostics point at the real cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `evaluate` was called on a past-the-end or otherwise
    /// non-dereferenceable position. This is a caller contract violation;
    /// the predicate rejects instead of fabricating an outcome.
    #[error("invalid iterator: {0}")]
    InvalidIterator(String),

    /// Externally supplied predicate logic faulted during dispatch. The
    /// fault is wrapped and surfaced as a normal evaluation failure rather
    /// than crashing the traversal.
    #[error("external predicate fault in '{predicate}': {message}")]
    ExternalFault {
        /// `name()` of the faulting predicate.
        predicate: String,
        /// Description of the fault raised by the external logic.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = EvalError::InvalidIterator("cursor past the end".into());
        assert_eq!(err.to_string(), "invalid iterator: cursor past the end");

        let err = EvalError::ExternalFault {
            predicate: "UserDensity".into(),
            message: "script raised TypeError".into(),
        };
        assert_eq!(
            err.to_string(),
            "external predicate fault in 'UserDensity': script raised TypeError"
        );
    }
}

pub mod backing;
pub mod binary;
pub mod combinator;
pub mod constant;
pub mod error;
pub mod library;
pub mod unary;

pub use backing::Backing;
pub use binary::BinaryPredicate;
pub use combinator::{And, AndBinary, Not, NotBinary, Or, OrBinary};
pub use constant::{AlwaysFalse, AlwaysFalseBinary, AlwaysTrue, AlwaysTrueBinary};
pub use error::EvalError;
pub use library::{CloserToViewpoint, CurveStart, Longer, SameCurve, TangentAligned, WithinRadius};
pub use unary::UnaryPredicate;

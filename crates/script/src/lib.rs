pub mod external;
pub mod registry;

pub use external::{BinaryThunk, ExternalBinaryPredicate, ExternalUnaryPredicate, UnaryThunk};
pub use registry::PredicateRegistry;

use std::collections::HashMap;

use tracing::debug;

use inkline_predicate::{BinaryPredicate, UnaryPredicate};

type UnaryFactory = Box<dyn Fn() -> Box<dyn UnaryPredicate> + Send + Sync>;
type BinaryFactory = Box<dyn Fn() -> Box<dyn BinaryPredicate> + Send + Sync>;

/// Registration point for predicates instantiable by name.
///
/// Rule-authoring code (including the scripting bridge) registers factories
/// here and later instantiates predicates by name. Every instantiation
/// produces a fresh instance, so the cached result of one traversal pass is
/// never shared with another.
#[derive(Default)]
pub struct PredicateRegistry {
    unary: HashMap<String, UnaryFactory>,
    binary: HashMap<String, BinaryFactory>,
}

impl PredicateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unary predicate factory under `name`, replacing any
    /// previous registration with the same name.
    pub fn register_unary<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn UnaryPredicate> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(predicate = %name, "registered unary predicate");
        self.unary.insert(name, Box::new(factory));
    }

    /// Register a binary predicate factory under `name`, replacing any
    /// previous registration with the same name.
    pub fn register_binary<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn BinaryPredicate> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(predicate = %name, "registered binary predicate");
        self.binary.insert(name, Box::new(factory));
    }

    /// Instantiate a fresh unary predicate, or `None` for an unknown name.
    pub fn make_unary(&self, name: &str) -> Option<Box<dyn UnaryPredicate>> {
        self.unary.get(name).map(|factory| factory())
    }

    /// Instantiate a fresh binary predicate, or `None` for an unknown name.
    pub fn make_binary(&self, name: &str) -> Option<Box<dyn BinaryPredicate>> {
        self.binary.get(name).map(|factory| factory())
    }

    /// Names of the registered unary predicates, in arbitrary order.
    pub fn unary_names(&self) -> impl Iterator<Item = &str> {
        self.unary.keys().map(String::as_str)
    }

    /// Names of the registered binary predicates, in arbitrary order.
    pub fn binary_names(&self) -> impl Iterator<Item = &str> {
        self.binary.keys().map(String::as_str)
    }
}

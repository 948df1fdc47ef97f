//! Engine factory registration.
//!
//! New engine backends register factories here instead of extending an
//! enum. Each factory probes its own availability; the registry picks
//! the first factory that reports `Available` at call time.

use std::sync::Arc;

use super::{Availability, EngineError, RuleEngine};

/// Factory for one engine backend.
///
/// Implementations are responsible for:
/// 1. Probing whether the backend can run at all (library present,
///    native dependency loadable)
/// 2. Creating an engine instance with a rule program pre-loaded
/// 3. Providing a unique type identifier
pub trait EngineFactory: Send + Sync {
    /// Unique identifier for this backend, e.g. `"metta"`.
    fn engine_type(&self) -> &'static str;

    /// Capability probe. Cheap; called on every reasoning attempt.
    fn availability(&self) -> Availability;

    /// Create an engine with `rules_text` loaded.
    fn create(&self, rules_text: &str) -> Result<Box<dyn RuleEngine>, EngineError>;
}

impl std::fmt::Debug for dyn EngineFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineFactory")
            .field("engine_type", &self.engine_type())
            .finish()
    }
}

/// Ordered registry of engine factories.
#[derive(Default)]
pub struct EngineRegistry {
    factories: Vec<Arc<dyn EngineFactory>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. Registration order is preference order.
    pub fn register(&mut self, factory: Arc<dyn EngineFactory>) {
        self.factories.push(factory);
    }

    /// First factory reporting `Available`, or the reason none can
    /// serve.
    pub fn first_available(&self) -> Result<Arc<dyn EngineFactory>, String> {
        if self.factories.is_empty() {
            return Err("no rule engine backend registered".to_string());
        }

        let mut reasons = Vec::new();
        for factory in &self.factories {
            match factory.availability() {
                Availability::Available => return Ok(Arc::clone(factory)),
                Availability::Unavailable(reason) => {
                    reasons.push(format!("{}: {}", factory.engine_type(), reason));
                }
            }
        }
        Err(reasons.join("; "))
    }

    /// Registered backend identifiers, in preference order.
    pub fn registered_types(&self) -> Vec<&str> {
        self.factories.iter().map(|f| f.engine_type()).collect()
    }

    /// The stock registry. No engine backend ships with this
    /// repository; the seam exists for one to be plugged in, and a
    /// stock build always reports unavailable and takes the heuristic
    /// fallback.
    pub fn with_defaults() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.registered_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Term;

    struct StubEngine;

    impl RuleEngine for StubEngine {
        fn run(&mut self, _program: &str) -> Result<(), EngineError> {
            Ok(())
        }

        fn query(&mut self, _query: &str) -> Result<Vec<Term>, EngineError> {
            Ok(vec![])
        }
    }

    struct StubFactory {
        availability: Availability,
    }

    impl EngineFactory for StubFactory {
        fn engine_type(&self) -> &'static str {
            "stub"
        }

        fn availability(&self) -> Availability {
            self.availability.clone()
        }

        fn create(&self, _rules_text: &str) -> Result<Box<dyn RuleEngine>, EngineError> {
            Ok(Box::new(StubEngine))
        }
    }

    #[test]
    fn test_empty_registry_reports_reason() {
        let registry = EngineRegistry::new();
        let err = registry.first_available().unwrap_err();
        assert!(err.contains("no rule engine backend registered"));
    }

    #[test]
    fn test_unavailable_factory_reason_is_surfaced() {
        let mut registry = EngineRegistry::new();
        registry.register(Arc::new(StubFactory {
            availability: Availability::Unavailable("native library missing".to_string()),
        }));

        let err = registry.first_available().unwrap_err();
        assert!(err.contains("stub"));
        assert!(err.contains("native library missing"));
    }

    #[test]
    fn test_first_available_wins() {
        let mut registry = EngineRegistry::new();
        registry.register(Arc::new(StubFactory {
            availability: Availability::Unavailable("down".to_string()),
        }));
        registry.register(Arc::new(StubFactory {
            availability: Availability::Available,
        }));

        assert!(registry.first_available().is_ok());
        assert_eq!(registry.registered_types(), vec!["stub", "stub"]);
    }

    #[test]
    fn test_stock_registry_is_empty() {
        assert!(EngineRegistry::with_defaults().first_available().is_err());
    }
}

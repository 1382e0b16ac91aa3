//! Name-based lookup of integrators
//!
//! Each integrator describes itself (canonical name, aliases, order), so the
//! registry only has to index prototypes by every name they answer to. The
//! configuration layer uses it to turn an `integrator_type` string into a
//! boxed integrator.
//!
//! Integrators carry no state, so a registered prototype is handed out with
//! `clone_box()` and every caller gets its own box.

use super::Integrator;
use bevy::log::debug;
use std::collections::{BTreeSet, HashMap};

/// Registry of integrator prototypes indexed by canonical name and alias
///
/// Lookups are exact and case-sensitive. Both the canonical name and every
/// alias map to a prototype of the same integrator.
pub struct IntegratorRegistry {
    /// Maps names (canonical and aliases) to integrator prototypes
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register the integrators that ship with the crate.
    ///
    /// This populates the registry with [`ExplicitEuler`](super::ExplicitEuler)
    /// and [`Verlet`](super::Verlet) under their names and aliases.
    /// Returns self for method chaining.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{ExplicitEuler, Verlet};

        self.register_integrator(Box::new(ExplicitEuler));
        self.register_integrator(Box::new(Verlet));

        self
    }

    /// Register a single integrator.
    ///
    /// Returns self for method chaining.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    /// Register an integrator under its canonical name and all of its aliases.
    ///
    /// The integrator's own metadata decides the names, so nothing else has to
    /// be kept in sync. Later registrations replace earlier ones answering to
    /// the same name.
    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        let name = integrator.name();
        debug!(
            "registering integrator '{}' (order {})",
            name,
            integrator.convergence_order()
        );

        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }
        self.integrators.insert(name.to_string(), integrator);
    }

    /// Create a fresh boxed integrator by canonical name or alias.
    ///
    /// # Errors
    ///
    /// Returns a message listing the available integrators and aliases when
    /// `name` is unknown. The configuration layer wraps it in
    /// [`SimulationError::InvalidIntegrator`](crate::error::SimulationError::InvalidIntegrator).
    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, String> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| {
                let aliases: Vec<String> =
                    self.list_aliases().into_iter().map(|(a, _)| a).collect();
                format!(
                    "Unknown integrator: '{}'. Available integrators: {}. Aliases: {}",
                    name,
                    self.list_available().join(", "),
                    aliases.join(", ")
                )
            })
    }

    /// Whether `name` resolves to an integrator, either as a canonical name or
    /// as an alias.
    pub fn contains(&self, name: &str) -> bool {
        self.integrators.contains_key(name)
    }

    /// Canonical names, sorted
    pub fn list_available(&self) -> Vec<String> {
        self.integrators
            .values()
            .map(|integrator| integrator.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(alias, canonical name)` pairs, sorted by alias
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort();
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::Body;
    use crate::physics::integrators::Verlet;
    use crate::physics::math::{Scalar, Vector};

    #[derive(Debug, Clone)]
    struct FrozenIntegrator;

    impl Integrator for FrozenIntegrator {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn state_depth(&self) -> usize {
            3
        }

        fn current_index(&self) -> usize {
            1
        }

        fn integrate(&self, _: &mut Body, _: Vector, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            0
        }

        fn name(&self) -> &'static str {
            "frozen"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["ice"]
        }
    }

    #[test]
    fn test_standard_integrators() {
        let registry = IntegratorRegistry::default();
        assert_eq!(registry.list_available(), vec!["explicit_euler", "verlet"]);

        let euler = registry.create("euler").unwrap();
        assert_eq!(euler.name(), "explicit_euler");
        assert_eq!(euler.convergence_order(), 1);

        let verlet = registry.create("stormer_verlet").unwrap();
        assert_eq!(verlet.name(), "verlet");
        assert_eq!(verlet.state_depth(), 2);
    }

    #[test]
    fn test_list_aliases() {
        let registry = IntegratorRegistry::default();
        let aliases: HashMap<_, _> = registry.list_aliases().into_iter().collect();

        assert_eq!(aliases.get("euler"), Some(&"explicit_euler".to_string()));
        assert_eq!(aliases.get("position_verlet"), Some(&"verlet".to_string()));
        assert!(!aliases.contains_key("verlet"));
    }

    #[test]
    fn test_unknown_integrator_error() {
        let registry = IntegratorRegistry::default();

        let error = registry.create("rk4").err().unwrap();
        assert!(error.contains("Unknown integrator: 'rk4'"));
        assert!(error.contains("explicit_euler, verlet"));
        assert!(error.contains("Aliases"));
    }

    #[test]
    fn test_case_sensitivity() {
        let registry = IntegratorRegistry::default();
        assert!(registry.create("Verlet").is_err());
        assert!(registry.create("verlet").is_ok());
    }

    #[test]
    fn test_custom_integrator_registration() {
        let mut registry = IntegratorRegistry::new();
        assert!(registry.list_available().is_empty());

        registry.register_integrator(Box::new(FrozenIntegrator));
        let frozen = registry.create("ice").unwrap();
        assert_eq!(frozen.name(), "frozen");

        // The body shape comes from whatever the registry hands out
        let body = Body::new(frozen.as_ref(), 1.0);
        assert_eq!(body.state_depth(), 3);
        assert_eq!(body.current_index(), 1);
        assert!(body.get_relative(1).is_some());
        assert!(body.get_relative(-1).is_some());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_custom_shape_rejects_huge_past_offset() {
        let registry = IntegratorRegistry::new().with_integrator(Box::new(FrozenIntegrator));
        let frozen = registry.create("frozen").unwrap();

        let mut body = Body::new(frozen.as_ref(), 1.0);
        body.set_relative(1, Vector::X, Vector::ZERO);
        body.before(usize::MAX);
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = IntegratorRegistry::default().with_integrator(Box::new(Verlet));
        assert_eq!(registry.list_available().len(), 2);
        assert!(registry.contains("position_verlet"));
    }
}

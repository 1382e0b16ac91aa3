use crate::error::SimulationError;
use crate::physics::integrators::{Integrator, IntegratorRegistry};
use crate::physics::math::Scalar;
use crate::physics::system::System;
use bevy::log::{info, warn};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub integrator: IntegratorConfig,
    pub time_step: Scalar,
    pub body_count: usize,
    pub body_mass: Scalar,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            time_step: 0.01,
            body_count: 2,
            body_mass: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Canonical name or alias known to [`IntegratorRegistry`]
    #[serde(rename = "type")]
    pub integrator_type: String,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            integrator_type: "verlet".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Layered load: defaults, then `config.toml` in the platform config
    /// directory, then `SPRINGDRIFT_*` environment variables.
    pub fn load_from_user_config() -> Result<Self, SimulationError> {
        match Self::user_config_path() {
            Some(path) => Self::load_layered(&path),
            None => {
                warn!("No platform config directory. Falling back to ./springdrift.toml");
                Self::load_layered(Path::new("springdrift.toml"))
            }
        }
    }

    /// Defaults, overridden by `path` if it exists, overridden by the
    /// environment. Nested keys use `__`, as in
    /// `SPRINGDRIFT_PHYSICS__TIME_STEP=0.001`.
    pub fn load_layered(path: &Path) -> Result<Self, SimulationError> {
        info!("Loading configuration from {}", path.display());

        let config = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix("SPRINGDRIFT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SimulationError::ConfigLoad(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SimulationError::ConfigLoad(e.to_string()))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "springdrift")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SimulationError::ConfigSave(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SimulationError::ConfigSave(e.to_string()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let physics = &self.physics;
        if !(physics.time_step > 0.0 && physics.time_step.is_finite()) {
            return Err(SimulationError::InvalidTimeStep(physics.time_step));
        }
        if !(physics.body_mass > 0.0 && physics.body_mass.is_finite()) {
            return Err(SimulationError::InvalidMass(physics.body_mass));
        }
        self.create_integrator().map(|_| ())
    }

    pub fn create_integrator(&self) -> Result<Box<dyn Integrator>, SimulationError> {
        IntegratorRegistry::default()
            .create(&self.physics.integrator.integrator_type)
            .map_err(SimulationError::InvalidIntegrator)
    }

    /// A system of `body_count` bodies of `body_mass`, at rest at the origin
    /// with no force. The time step is left to the caller.
    pub fn build_system(&self) -> Result<System, SimulationError> {
        self.validate()?;

        let mut system = System::new(self.create_integrator()?, self.physics.body_count);
        for index in 0..system.body_count() {
            system.body_mut(index).set_mass(self.physics.body_mass);
        }
        Ok(system)
    }
}

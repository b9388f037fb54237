//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`StarConfig`]       – the central star (name, mass)
//! - [`PlanetConfig`]     – orbital elements for each planet
//! - [`ParametersConfig`] – physical constants (gravitational constant, softening)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! star:
//!   name: Sun
//!   mass_solar: 1.0        # solar masses
//!
//! planets:
//!   - name: Earth
//!     a_au: 1.0            # semi-major axis in AU
//!     period_days: 365.0   # orbital period in days
//!   - name: Jupiter
//!     a_au: 5.2
//!     period_days: 4333.0
//!
//! parameters:
//!   G: 0.00029591220828559 # AU^3 / (Msun * day^2)
//!   softening2: 1.0e-6     # softening epsilon^2, AU^2
//!
//! mutual_gravity: true     # false -> every planet is a test particle
//!
//! mass_overrides:          # optional, Msun by planet name
//!   Earth: 3.0e-6
//! ```
//!
//! `parameters`, `mutual_gravity`, and `mass_overrides` may be omitted; the
//! crate defaults then apply. The seeding layer maps this configuration into
//! the runtime body list.

use std::collections::HashMap;

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_SOFTENING2, G_AU_DAY};

/// The central star: index 0 of the seeded body list
#[derive(Deserialize, Debug, Clone)]
pub struct StarConfig {
    pub name: String,       // display name, also the mass-table key
    pub mass_solar: f64,    // mass in solar masses
}

/// Orbital elements for a single planet
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub name: String,       // label, used for mass lookup
    pub a_au: f64,          // semi-major axis in AU
    pub period_days: f64,   // orbital period in days
}

/// Simulation-wide physical constants, fixed at init
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64,             // gravitational constant
    #[serde(default = "default_softening2")]
    pub softening2: f64,    // softening - prevents singular forces at small separations
}

fn default_g() -> f64 {
    G_AU_DAY
}

fn default_softening2() -> f64 {
    DEFAULT_SOFTENING2
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: default_g(),
            softening2: default_softening2(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub star: StarConfig,             // the central star
    pub planets: Vec<PlanetConfig>,   // planets, in seeding order
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants
    #[serde(default)]
    pub mutual_gravity: bool,         // planets attract each other when true
    #[serde(default)]
    pub mass_overrides: HashMap<String, f64>, // per-name mass replacements
}

//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - physical constants (`Constants`)
//! - seeded system state (`System` with bodies at their start positions)
//! - active force set (`AccelSet`)
//!
//! Seeding places the star at the origin and every planet at polar angle
//! zero with its circular-orbit speed. The collinear start layout is the
//! documented default, not a physical requirement. With mutual gravity on,
//! planets get their cataloged masses and the star receives a
//! counter-velocity so total momentum starts at zero; with it off, all
//! planet masses are forced to zero and the star stays at rest.

use std::f64::consts::TAU;

use crate::configuration::config::{PlanetConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Constants;
use crate::simulation::states::{Body, NVec2, System};

/// Approximate masses in solar masses for the planets heavy enough to
/// matter. Bodies absent from this table stay massless test particles even
/// when mutual gravity is enabled.
const KNOWN_MASSES: &[(&str, f64)] = &[
    ("Jupiter", 0.0009543),
    ("Saturn", 0.0002857),
    ("Neptune", 0.0000515),
    ("Uranus", 0.0000446),
];

/// Mass from the built-in table, if the body is listed
pub fn known_mass(name: &str) -> Option<f64> {
    KNOWN_MASSES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, m)| *m)
}

/// Fully-initialized runtime bundle for one simulation run
///
/// Constructed from a [`ScenarioConfig`] and handed to the worker: the
/// constants and bodies go out in the `init` message, the force set mirrors
/// what the worker will rebuild on its side.
pub struct Scenario {
    pub constants: Constants,
    pub system: System,
    pub forces: AccelSet,
    pub mutual_gravity: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let constants = Constants {
            g: cfg.parameters.g,
            softening2: cfg.parameters.softening2,
        };

        // Initial system state: star plus planets on the positive x axis
        let system = System::new(seed_bodies(&cfg));

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: constants.g,
            softening2: constants.softening2,
        });

        Self {
            constants,
            system,
            forces,
            mutual_gravity: cfg.mutual_gravity,
        }
    }
}

/// Derive the initial body list: star first, then planets in catalog order.
/// Body identity is the array index, so this order is what `state`
/// responses are keyed by.
pub fn seed_bodies(cfg: &ScenarioConfig) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(cfg.planets.len() + 1);

    // Star placeholder; velocity may be corrected below for the barycenter
    bodies.push(Body {
        x: NVec2::zeros(),
        v: NVec2::zeros(),
        m: cfg.star.mass_solar,
    });

    for p in &cfg.planets {
        // Circular-orbit speed v = 2*pi*a / T, perpendicular to the radius
        let speed = TAU * p.a_au / p.period_days;
        let m = if cfg.mutual_gravity { planet_mass(cfg, p) } else { 0.0 };

        bodies.push(Body {
            x: NVec2::new(p.a_au, 0.0),
            v: NVec2::new(0.0, speed),
            m,
        });
    }

    // Barycenter: give the star a counter-velocity so total momentum ~ 0
    // and the system does not drift as a whole
    if cfg.mutual_gravity && cfg.star.mass_solar > 0.0 {
        let mut p_total = NVec2::zeros();
        for b in &bodies[1..] {
            p_total += b.m * b.v;
        }
        bodies[0].v = -p_total / cfg.star.mass_solar;
    }

    bodies
}

/// Per-scenario overrides win over the built-in table; everything else is 0
fn planet_mass(cfg: &ScenarioConfig, p: &PlanetConfig) -> f64 {
    cfg.mass_overrides
        .get(&p.name)
        .copied()
        .or_else(|| known_mass(&p.name))
        .unwrap_or(0.0)
}

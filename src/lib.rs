pub mod simulation;
pub mod configuration;
pub mod worker;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Constants, DEFAULT_SOFTENING2, G_AU_DAY, MAX_SUBSTEP_DAYS};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{recommended_substeps, verlet_integrator};
pub use simulation::engine::Simulation;
pub use simulation::scenario::{known_mass, seed_bodies, Scenario};

pub use configuration::config::{ParametersConfig, PlanetConfig, ScenarioConfig, StarConfig};

pub use worker::worker::{Command, SimWorker, StateUpdate};

pub use benchmark::benchmark::{bench_gravity, bench_step};

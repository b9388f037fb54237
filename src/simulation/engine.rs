//! Simulation engine: owns the body set and applies the four mutating
//! operations (`init`, `step`, `add`, `reset`)
//!
//! One `Simulation` instance per worker; there is no shared or global
//! state, so independent simulations can coexist. Every operation leaves
//! the acceleration cache consistent with the current positions before it
//! returns, so a state snapshot taken afterwards is never physically stale.

use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::verlet_integrator;
use super::params::Constants;
use super::states::{Body, NVec2, System};

pub struct Simulation {
    constants: Constants,
    system: System,
    forces: AccelSet,
}

impl Simulation {
    /// Empty simulation with default constants; `init` supplies the real state
    pub fn new() -> Self {
        let constants = Constants::default();
        Self {
            forces: build_forces(&constants),
            system: System::default(),
            constants,
        }
    }

    /// Replace constants, force set, and all body state.
    /// This is the only operation that redefines `g`/`softening2`.
    pub fn init(&mut self, constants: Constants, bodies: Vec<Body>) {
        self.constants = constants;
        self.forces = build_forces(&constants);
        self.system.replace(bodies);
        self.refresh_acc();
    }

    /// Advance by `dt_days`, split into `substeps` Verlet substeps.
    /// Membership is unchanged; the integrator keeps the cache current.
    pub fn step(&mut self, dt_days: f64, substeps: u32) {
        verlet_integrator(&mut self.system, &self.forces, dt_days, substeps);
    }

    /// Append one body at the end of the array; it interacts (or is acted
    /// upon, for a test particle) starting from the very next step.
    pub fn add(&mut self, body: Body) {
        self.system.push(body);
        self.refresh_acc();
    }

    /// Replace the body set, keeping the current constants
    pub fn reset(&mut self, bodies: Vec<Body>) {
        self.system.replace(bodies);
        self.refresh_acc();
    }

    pub fn constants(&self) -> Constants {
        self.constants
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Position snapshot in body order, for state responses
    pub fn positions(&self) -> Vec<NVec2> {
        self.system.positions()
    }

    /// Re-evaluate the force field at the current position snapshot
    fn refresh_acc(&mut self) {
        let System { bodies, acc } = &mut self.system;
        self.forces.accumulate_accels(bodies, acc);
    }
}

fn build_forces(constants: &Constants) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: constants.g,
        softening2: constants.softening2,
    })
}

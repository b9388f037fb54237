//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds one body's physical state using `NVec2`
//! - `System` holds the list of bodies plus the per-body acceleration cache
//!
//! The cache always has exactly one entry per body; membership changes go
//! through the `System` methods so both arrays grow together.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position, AU
    pub v: NVec2, // velocity, AU/day
    pub m: f64,   // mass, solar masses; 0 = test particle
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, star by convention at index 0
    pub acc: Vec<NVec2>,   // cached accelerations, same length as `bodies`
}

impl System {
    /// System from an initial body list, cache zeroed
    pub fn new(bodies: Vec<Body>) -> Self {
        let acc = vec![NVec2::zeros(); bodies.len()];
        Self { bodies, acc }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Append one body together with its cache slot
    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
        self.acc.push(NVec2::zeros());
    }

    /// Replace the whole body set; the cache is rebuilt to match
    pub fn replace(&mut self, bodies: Vec<Body>) {
        self.acc = vec![NVec2::zeros(); bodies.len()];
        self.bodies = bodies;
    }

    /// Current positions, in body order
    pub fn positions(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.x).collect()
    }
}

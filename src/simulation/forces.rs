//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct Newtonian gravity with
//! softening; contributions of all registered terms are summed into a
//! single acceleration vector per body

use crate::simulation::states::{Body, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// Trait for acceleration sources operating on a body slice
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Newtonian gravity with softening (direct n^2 pair sum)
/// `softening2` keeps the force finite when two bodies coincide; close
/// encounters are damped instead of diverging
pub struct NewtonianGravity {
    pub g: f64,          // gravitational constant
    pub softening2: f64, // squared softening length
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        let n = bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j. The pair order is
        // fixed, so the floating-point sum is reproducible run to run.
        for i in 0..n {
            let xi = bodies[i].x; // position of body i
            let mi = bodies[i].m; // mass of body i

            for j in (i + 1)..n {
                // r is the displacement vector from i to j:
                // i feels a pull along +r, j feels a pull along -r
                let r = bodies[j].x - xi;

                // Softened squared separation: d2 = |r|^2 + softening^2
                let d2 = r.dot(&r) + self.softening2;

                // 1 / |r_soft| and 1 / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r_soft|^3
                let coef = self.g * inv_r3;

                // Newton's law, equal and opposite:
                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                // A zero-mass body contributes nothing here but still
                // collects the full field on its own entry.
                out[i] += coef * bodies[j].m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

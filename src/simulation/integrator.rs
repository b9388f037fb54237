//! Fixed-step time integration for the N-body system
//!
//! Velocity-Verlet driven by the acceleration cache in `System`: each
//! substep consumes `a(t)` from the cache and leaves `a(t+h)` behind for
//! the next one, so steps and membership changes share one force
//! bookkeeping path.

use super::forces::AccelSet;
use super::params::MAX_SUBSTEP_DAYS;
use super::states::System;

/// Substep count that keeps each substep at or below one simulated hour
/// Always at least 1
pub fn recommended_substeps(dt_days: f64) -> u32 {
    (dt_days.abs() / MAX_SUBSTEP_DAYS).ceil().max(1.0) as u32
}

/// Advance the system in place by `dt_days` using `substeps` velocity-Verlet
/// substeps with `h = dt_days / substeps`.
///
/// `sys.acc` must hold the accelerations for the current positions on entry
/// (init/add/reset and previous steps maintain this) and holds them again on
/// return. `dt_days = 0` is a no-op; a non-positive substep count is
/// corrected to 1. The substep size is never clamped here, bounding `h` is
/// the caller's job (see [`recommended_substeps`]).
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, dt_days: f64, substeps: u32) {
    if sys.is_empty() || dt_days == 0.0 {
        return;
    }

    let substeps = substeps.max(1); // never divide by zero
    let h = dt_days / substeps as f64;
    let half_h = 0.5 * h;
    let half_h2 = 0.5 * h * h;

    for _ in 0..substeps {
        // a(t), cached by the previous substep or the last membership change
        let a_old = sys.acc.clone();

        // Drift: x(t+h) = x(t) + v(t) h + 1/2 a(t) h^2
        for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
            b.x += b.v * h + *a * half_h2;
        }

        // a(t+h) at the new positions, written back into the cache
        let System { bodies, acc } = &mut *sys;
        forces.accumulate_accels(bodies, acc);

        // Kick: v(t+h) = v(t) + 1/2 (a(t) + a(t+h)) h
        for ((b, a0), a1) in sys.bodies.iter_mut().zip(a_old.iter()).zip(sys.acc.iter()) {
            b.v += (*a0 + *a1) * half_h;
        }
    }
}

use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::{DEFAULT_SOFTENING2, G_AU_DAY};
use crate::simulation::states::{Body, NVec2, System};

/// Deterministic ring of bodies, no rand needed
fn ring_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        bodies.push(Body {
            x: NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0),
            v: NVec2::zeros(),
            m: if i == 0 { 1.0 } else { 1e-4 },
        });
    }
    bodies
}

/// Time one direct-sum force evaluation at different system sizes
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let bodies = ring_bodies(n);
        let mut out = vec![NVec2::zeros(); n];

        let direct = NewtonianGravity {
            g: G_AU_DAY,
            softening2: DEFAULT_SOFTENING2,
        };

        // Warm up
        direct.acceleration(&bodies, &mut out);

        let t0 = Instant::now();
        direct.acceleration(&bodies, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Time full Verlet steps (two force evaluations per substep) at
/// interactive body counts
pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128];
    let substeps = 24; // one simulated day at hourly substeps

    for n in ns {
        let mut sys = System::new(ring_bodies(n));
        let forces = AccelSet::new().with(NewtonianGravity {
            g: G_AU_DAY,
            softening2: DEFAULT_SOFTENING2,
        });
        // Prime the acceleration cache like init would
        {
            let System { bodies, acc } = &mut sys;
            forces.accumulate_accels(bodies, acc);
        }

        // Warm up
        verlet_integrator(&mut sys, &forces, 1.0, substeps);

        let steps = 200;
        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys, &forces, 1.0, substeps);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:4}, {substeps} substeps/day, step = {per_step:9.7} s");
    }
}

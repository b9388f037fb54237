use orrery::{recommended_substeps, Body, NVec2, Scenario, ScenarioConfig, SimWorker};
use orrery::{bench_gravity, bench_step};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Simulated days per real second; 0 = paused
    #[arg(long, default_value_t = 30.0)]
    sim_speed: f64,

    /// Total simulated days to run before exiting
    #[arg(long, default_value_t = 365.0)]
    days: f64,

    /// Run the micro-benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(cfg);
    info!(
        "seeded {} bodies (mutual gravity {})",
        scenario.system.len(),
        if scenario.mutual_gravity { "on" } else { "off" },
    );

    let worker = SimWorker::spawn();
    worker.init(
        scenario.constants.g,
        scenario.constants.softening2,
        scenario.system.bodies.clone(),
    );

    // Caller-side mirror: only the body count matters here. A full UI would
    // keep radius/color/name per index and sync positions the same way.
    let mut mirror_len = scenario.system.len();

    // One state response arrives per command; counting both sides lets the
    // shutdown path drain to the response of the last command sent.
    let mut sent: u64 = 1; // the init above
    let mut received: u64 = 0;

    // Frame loop: fixed frame delta, dt scaled by sim speed, substeps capped
    // at one simulated hour each
    let frame_seconds = 1.0 / 60.0;
    let mut elapsed_days = 0.0;
    let mut frame: u64 = 0;
    let mut probe_added = false;

    while elapsed_days < args.days {
        let dt_days = frame_seconds * args.sim_speed;
        if dt_days <= 0.0 {
            break; // paused forever, nothing more to show
        }
        worker.step(dt_days, recommended_substeps(dt_days));
        sent += 1;
        elapsed_days += dt_days;

        // Halfway through, drop in a massless probe to exercise runtime adds
        if !probe_added && elapsed_days >= args.days * 0.5 {
            worker.add(Body {
                x: NVec2::new(2.5, 0.0),
                v: NVec2::new(0.0, 0.011),
                m: 0.0,
            });
            sent += 1;
            mirror_len += 1;
            probe_added = true;
            info!("added probe at 2.5 AU ({elapsed_days:.1} days in)");
        }

        // Drain whatever responses have arrived, keep the newest
        let mut newest = None;
        while let Some(state) = worker.try_state() {
            received += 1;
            newest = Some(state);
        }
        if let Some(state) = newest {
            if state.pos.len() != mirror_len {
                // Stale snapshot from before a membership change; skip it
                frame += 1;
                continue;
            }
            if frame % 600 == 0 {
                let last = state.pos[state.pos.len() - 1];
                info!(
                    "day {elapsed_days:7.1}: {} bodies, last at ({:+.3}, {:+.3}) AU",
                    state.pos.len(),
                    last.x,
                    last.y
                );
            }
        }
        frame += 1;
    }

    // Drain to the response of the final command for a settled snapshot
    let mut last_state = None;
    while received < sent {
        match worker.recv_state() {
            Some(state) => {
                received += 1;
                last_state = Some(state);
            }
            None => break,
        }
    }
    match last_state {
        Some(state) => {
            for (i, p) in state.pos.iter().enumerate() {
                info!("body {i}: ({:+.4}, {:+.4}) AU", p.x, p.y);
            }
        }
        None => warn!("worker ended before the final snapshot"),
    }

    Ok(())
}

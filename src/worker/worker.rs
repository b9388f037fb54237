//! Message-driven simulation worker
//!
//! A dedicated thread holds exclusive, mutable ownership of a
//! [`Simulation`]; the rest of the program talks to it only through a pair
//! of mpsc channels, so no body state is ever shared by reference. Commands
//! are processed strictly in send order, and every processed command is
//! answered with a fresh [`StateUpdate`] carrying the positions in body
//! order. Callers must not assume a 1:1 request/response pairing beyond
//! that ordering: sends are fire-and-forget and responses are drained
//! whenever the caller gets around to it.
//!
//! Keeping the O(n^2) force evaluation on its own thread keeps the caller's
//! loop free for input handling and rendering.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::debug;

use crate::simulation::engine::Simulation;
use crate::simulation::params::Constants;
use crate::simulation::states::{Body, NVec2};

/// Inbound protocol. Exhaustively matched, so an unknown message kind is
/// unrepresentable; degenerate numeric payloads are corrected (`substeps`)
/// or absorbed (softening) rather than failing.
#[derive(Debug, Clone)]
pub enum Command {
    /// (Re)initialize full state and constants
    Init {
        g: f64,
        softening2: f64,
        bodies: Vec<Body>,
    },
    /// Advance the simulation by `dt_days`
    Step { dt_days: f64, substeps: u32 },
    /// Append one body; mass 0 makes it a non-perturbing test particle
    Add { body: Body },
    /// Replace the body set, keeping the current constants
    Reset { bodies: Vec<Body> },
}

/// Outbound protocol: current positions, in the same order the bodies were
/// established (init order, then add order)
#[derive(Debug, Clone)]
pub struct StateUpdate {
    pub pos: Vec<NVec2>,
}

/// Caller-side handle to a worker thread
///
/// Dropping the handle closes the command channel, which ends the worker
/// loop; the thread is joined on drop so no simulation outlives its handle.
pub struct SimWorker {
    commands: Option<Sender<Command>>,
    states: Receiver<StateUpdate>,
    handle: Option<JoinHandle<()>>,
}

impl SimWorker {
    /// Spawn a worker around an empty simulation; `init` supplies the state
    pub fn spawn() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (state_tx, state_rx) = mpsc::channel::<StateUpdate>();

        let handle = thread::spawn(move || run(cmd_rx, state_tx));

        Self {
            commands: Some(cmd_tx),
            states: state_rx,
            handle: Some(handle),
        }
    }

    /// Queue a command, fire-and-forget.
    /// Returns false if the worker is already gone.
    pub fn send(&self, cmd: Command) -> bool {
        match &self.commands {
            Some(tx) => tx.send(cmd).is_ok(),
            None => false,
        }
    }

    pub fn init(&self, g: f64, softening2: f64, bodies: Vec<Body>) -> bool {
        self.send(Command::Init {
            g,
            softening2,
            bodies,
        })
    }

    pub fn step(&self, dt_days: f64, substeps: u32) -> bool {
        self.send(Command::Step { dt_days, substeps })
    }

    pub fn add(&self, body: Body) -> bool {
        self.send(Command::Add { body })
    }

    pub fn reset(&self, bodies: Vec<Body>) -> bool {
        self.send(Command::Reset { bodies })
    }

    /// Non-blocking: next pending state, if one has arrived
    pub fn try_state(&self) -> Option<StateUpdate> {
        self.states.try_recv().ok()
    }

    /// Blocking: wait for the next state; `None` once the worker is gone
    pub fn recv_state(&self) -> Option<StateUpdate> {
        self.states.recv().ok()
    }

    /// Drain everything queued and keep only the newest state, if any.
    /// Frame loops use this to skip stale snapshots.
    pub fn latest_state(&self) -> Option<StateUpdate> {
        let mut latest = None;
        while let Some(s) = self.try_state() {
            latest = Some(s);
        }
        latest
    }
}

impl Drop for SimWorker {
    fn drop(&mut self) {
        // Close the command channel first so the worker loop sees the
        // disconnect and exits; anything still queued is discarded with it
        self.commands.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Worker loop: strict FIFO over the command channel, one state response
/// per processed command
fn run(commands: Receiver<Command>, states: Sender<StateUpdate>) {
    let mut sim = Simulation::new();

    while let Ok(cmd) = commands.recv() {
        apply(&mut sim, cmd);

        // The caller may already be tearing down; then there is no one left
        // to read responses and the loop can end
        let state = StateUpdate {
            pos: sim.positions(),
        };
        if states.send(state).is_err() {
            break;
        }
    }
}

fn apply(sim: &mut Simulation, cmd: Command) {
    match cmd {
        Command::Init {
            g,
            softening2,
            bodies,
        } => {
            debug!(
                "init: {} bodies, G = {:e}, softening2 = {:e}",
                bodies.len(),
                g,
                softening2
            );
            sim.init(Constants { g, softening2 }, bodies);
        }
        Command::Step { dt_days, substeps } => {
            sim.step(dt_days, substeps);
        }
        Command::Add { body } => {
            debug!("add: body at ({}, {}), m = {}", body.x.x, body.x.y, body.m);
            sim.add(body);
        }
        Command::Reset { bodies } => {
            debug!("reset: {} bodies, constants kept", bodies.len());
            sim.reset(bodies);
        }
    }
}

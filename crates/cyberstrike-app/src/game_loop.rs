//! Game loop thread. Runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via an `mpsc` channel; the latest snapshot is stored in shared state
//! for polling. While the engine is in combat the loop holds an input listener
//! and drains it once per tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::constants::TICK_RATE;
use cyberstrike_core::enums::ScreenMode;
use cyberstrike_core::input::InputFrame;
use cyberstrike_core::state::GameStateSnapshot;
use cyberstrike_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::input::{InputListenerGuard, InputRouter};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Loop pacing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Speed multiplier applied to the tick duration.
    pub time_scale: f64,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl LoopSettings {
    pub fn tick_duration(&self) -> Duration {
        if self.time_scale > 0.001 {
            TICK_DURATION.div_f64(self.time_scale)
        } else {
            TICK_DURATION
        }
    }
}

/// Handle to a running game loop thread.
#[derive(Debug)]
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopStopped)
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) -> Result<(), AppError> {
        // The loop may already have exited on its own; joining still reports panics.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    input: Arc<InputRouter>,
    latest_snapshot: SharedSnapshot,
) -> Result<GameLoopHandle, AppError> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("cyberstrike-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, settings, command_rx, &input, &latest_snapshot);
        })
        .map_err(AppError::SpawnLoop)?;

    Ok(GameLoopHandle { command_tx, thread })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    settings: LoopSettings,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    input: &Arc<InputRouter>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick_duration = settings.tick_duration();
    let mut listener: Option<CombatListener> = None;
    let mut next_tick_time = Instant::now();
    info!(?tick_duration, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => {
                    engine.queue_command(command);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Apply commands, then match the input listener to the resulting combat
        engine.process_commands();
        sync_listener(&engine, input, &mut listener);

        // 3. Sample input and advance one tick
        let frame = listener
            .as_ref()
            .map(|l| l.guard.take_frame())
            .unwrap_or_else(InputFrame::default);
        let snapshot = engine.tick(&frame);

        // 4. Store latest snapshot for polling
        publish(latest_snapshot, snapshot);

        // 5. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Input subscription owned by one combat session.
struct CombatListener {
    session: u64,
    guard: InputListenerGuard,
}

/// Hold a listener only while in combat, and a fresh one per combat session,
/// so staged input never crosses a leave and re-enter.
fn sync_listener(
    engine: &SimulationEngine,
    input: &Arc<InputRouter>,
    listener: &mut Option<CombatListener>,
) {
    let wanted = (engine.mode() == ScreenMode::Combat).then(|| engine.combat_session());
    if listener.as_ref().map(|l| l.session) == wanted {
        return;
    }

    if let Some(old) = listener.take() {
        debug!(session = old.session, "combat input detached");
    }
    if let Some(session) = wanted {
        *listener = Some(CombatListener {
            session,
            guard: input.attach(),
        });
        debug!(session, "combat input attached");
    }
}

fn publish(latest_snapshot: &Mutex<Option<GameStateSnapshot>>, snapshot: GameStateSnapshot) {
    let mut lock = latest_snapshot
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *lock = Some(snapshot);
}

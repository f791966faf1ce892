//! Application state shared between callers and the game loop thread.

use std::sync::{Arc, Mutex};

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::state::GameStateSnapshot;
use cyberstrike_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop::{self, GameLoopHandle, LoopSettings};
use crate::input::{InputEvent, InputRouter};

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Everything a frontend needs to drive the game.
///
/// `loop_handle` is `None` until `start` is called and again after `stop`.
#[derive(Debug, Default)]
pub struct AppState {
    loop_handle: Mutex<Option<GameLoopHandle>>,
    latest_snapshot: SharedSnapshot,
    input: Arc<InputRouter>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop if it is not already running.
    pub fn start(&self, config: SimConfig, settings: LoopSettings) -> Result<(), AppError> {
        let mut handle = self.lock_handle();
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(AppError::AlreadyRunning);
        }
        *handle = Some(game_loop::spawn_game_loop(
            config,
            settings,
            Arc::clone(&self.input),
            Arc::clone(&self.latest_snapshot),
        )?);
        Ok(())
    }

    /// Forward a player command to the running loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        match self.lock_handle().as_ref() {
            Some(handle) => handle.send(command),
            None => Err(AppError::NotStarted),
        }
    }

    /// Route a device event to the combat input listener. Returns false if
    /// the event was dropped because no listener is attached.
    pub fn dispatch_input(&self, event: InputEvent) -> bool {
        self.input.dispatch(event)
    }

    /// The most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .map(|lock| lock.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn input(&self) -> &Arc<InputRouter> {
        &self.input
    }

    /// Stop the loop and join its thread. Stopping a stopped state is a no-op.
    pub fn stop(&self) -> Result<(), AppError> {
        let handle = self.lock_handle().take();
        match handle {
            Some(handle) => handle.shutdown(),
            None => Ok(()),
        }
    }

    fn lock_handle(&self) -> std::sync::MutexGuard<'_, Option<GameLoopHandle>> {
        self.loop_handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.snapshot().is_none());
        assert!(!state.input().is_attached());
        assert!(matches!(
            state.send_command(PlayerCommand::OpenLoadout),
            Err(AppError::NotStarted)
        ));
        assert!(state.stop().is_ok());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = AppState::new();
        state
            .start(SimConfig::default(), LoopSettings::default())
            .unwrap();
        assert!(matches!(
            state.start(SimConfig::default(), LoopSettings::default()),
            Err(AppError::AlreadyRunning)
        ));
        state.stop().unwrap();
        assert!(matches!(
            state.send_command(PlayerCommand::OpenLoadout),
            Err(AppError::NotStarted)
        ));
    }

    #[test]
    fn test_input_dropped_outside_combat() {
        let state = AppState::new();
        assert!(!state.dispatch_input(InputEvent::PointerMove { x: 1.0, y: 1.0 }));
    }
}

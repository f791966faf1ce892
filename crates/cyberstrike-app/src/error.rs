use std::time::Duration;

use thiserror::Error;

/// Failures at the edges of the runtime. The simulation itself has none.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to spawn game loop thread: {0}")]
    SpawnLoop(#[source] std::io::Error),
    #[error("game loop already running")]
    AlreadyRunning,
    #[error("game loop not started")]
    NotStarted,
    #[error("game loop is not running")]
    LoopStopped,
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("session stalled waiting for {what} after {waited:?}")]
    SessionStalled { what: &'static str, waited: Duration },
}

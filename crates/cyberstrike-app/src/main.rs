use std::process::ExitCode;

use tracing::{error, info};

use cyberstrike_app::config::AppConfig;
use cyberstrike_app::error::AppError;
use cyberstrike_app::game_loop::LoopSettings;
use cyberstrike_app::session;
use cyberstrike_app::state::AppState;
use cyberstrike_app::telemetry;
use cyberstrike_sim::engine::SimConfig;

fn main() -> ExitCode {
    // Load .env if present; absence is not an error.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let config = AppConfig::from_env();
    info!(
        session_ticks = config.session_ticks,
        time_scale = config.time_scale,
        "starting CYBER STRIKE"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let state = AppState::new();
    state.start(
        SimConfig::default(),
        LoopSettings {
            time_scale: config.time_scale,
        },
    )?;

    let outcome = session::run_demo_session(&state, config.session_ticks);
    // Always stop the loop, but report the session error first.
    let stopped = state.stop();
    let report = outcome?;
    stopped?;

    info!(
        ticks = report.ticks,
        blue_score = report.score.blue.score,
        blue_kills = report.score.blue.kills,
        captured = ?report.captured,
        enemies_remaining = report.enemies_remaining,
        shots_fired = report.shots_fired,
        ticks_unobserved = report.ticks_unobserved,
        dropped_input = state.input().dropped_events(),
        "session complete"
    );
    Ok(())
}

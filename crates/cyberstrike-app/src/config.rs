//! Runtime configuration from the environment (not gameplay tuning).

use std::env;

use tracing::warn;

/// Combat ticks the scripted session plays before leaving combat.
pub const DEFAULT_SESSION_TICKS: u64 = 600;

/// Loop speed multiplier; 1.0 runs at the nominal tick rate.
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

/// Accepted time-scale range.
pub const TIME_SCALE_RANGE: (f64, f64) = (0.1, 8.0);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session_ticks: u64,
    pub time_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_ticks: DEFAULT_SESSION_TICKS,
            time_scale: DEFAULT_TIME_SCALE,
        }
    }
}

impl AppConfig {
    /// Read `CYBERSTRIKE_SESSION_TICKS` and `CYBERSTRIKE_TIME_SCALE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let session_ticks = parse_or(
            &lookup,
            "CYBERSTRIKE_SESSION_TICKS",
            defaults.session_ticks,
        );
        let time_scale = parse_or(&lookup, "CYBERSTRIKE_TIME_SCALE", defaults.time_scale);
        let (min, max) = TIME_SCALE_RANGE;
        let time_scale = if time_scale.is_finite() {
            time_scale.clamp(min, max)
        } else {
            defaults.time_scale
        };

        Self {
            session_ticks,
            time_scale,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, ?default, "invalid config value, using default");
                default
            }
        },
    }
}

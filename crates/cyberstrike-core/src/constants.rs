//! Simulation constants and tuning parameters.
//!
//! All distances are arena units, all rates are per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in units.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Inset from the arena edges that the player may not cross.
pub const ARENA_MARGIN: f64 = 20.0;

// --- Player ---

/// Player spawn position at combat start.
pub const PLAYER_SPAWN: (f64, f64) = (100.0, 300.0);

/// Player displacement per held movement key per tick.
pub const PLAYER_STEP: f64 = 3.0;

/// Maximum health for any combatant.
pub const MAX_HEALTH: f64 = 100.0;

// --- Enemies ---

/// Initial enemy roster positions at combat start.
pub const ENEMY_SPAWNS: [(f64, f64); 3] = [(700.0, 100.0), (700.0, 300.0), (700.0, 500.0)];

/// Enemy pursuit speed per tick.
pub const ENEMY_SPEED: f64 = 1.0;

/// Distance at which enemies stop closing on the player.
pub const ENEMY_ENGAGE_RADIUS: f64 = 50.0;

// --- Projectiles ---

/// Projectile speed per tick.
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Distance from an enemy within which a projectile hits.
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;

/// Health removed from an enemy per hit.
pub const PROJECTILE_DAMAGE: f64 = 25.0;

// --- Capture points ---

/// Capture point positions, labelled A, B, C.
pub const CAPTURE_POINTS: [(char, f64, f64); 3] =
    [('A', 200.0, 150.0), ('B', 400.0, 300.0), ('C', 600.0, 450.0)];

/// Distance from a capture point within which the player captures it.
pub const CAPTURE_RADIUS: f64 = 50.0;

/// Capture progress gained per tick inside the radius.
pub const CAPTURE_RATE: f64 = 2.0;

/// Progress at which a point flips ownership.
pub const CAPTURE_COMPLETE: f64 = 100.0;

// --- Scoring ---

/// Score awarded to the player's team per enemy kill.
pub const KILL_SCORE: u32 = 10;

/// One-time score awarded when a capture point flips.
pub const CAPTURE_SCORE: u32 = 50;

// --- Weapons ---

/// Damage rating gained per upgrade.
pub const UPGRADE_DAMAGE_STEP: u32 = 5;

/// Accuracy rating gained per upgrade.
pub const UPGRADE_ACCURACY_STEP: u32 = 2;

/// Ceiling for percentage ratings (accuracy, progress).
pub const RATING_MAX: u32 = 100;

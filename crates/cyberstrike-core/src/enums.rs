//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Team affiliation. The player fights for Blue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Neutral,
    Red,
    Blue,
}

/// Weapon category, used for the loadout tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Assault,
    Sniper,
    Smg,
    Shotgun,
}

/// Filter applied when browsing the weapon catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(WeaponCategory),
}

impl CategoryFilter {
    pub fn accepts(&self, category: WeaponCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

/// Movement directions driven by held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Map a keyboard key name to a movement direction (w/a/s/d, any case).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(Self::Up),
            "s" => Some(Self::Down),
            "a" => Some(Self::Left),
            "d" => Some(Self::Right),
            _ => None,
        }
    }

    /// Unit step for this direction in arena coordinates (y grows down).
    pub fn direction(&self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Screen mode (top-level navigation state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenMode {
    #[default]
    Menu,
    Loadout,
    Upgrade,
    Combat,
}

/// Result of an upgrade request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeOutcome {
    Upgraded { level: u32 },
    AtMaxLevel,
    UnknownWeapon,
}

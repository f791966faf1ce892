//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Movement and
//! firing are not commands; they arrive through the sampled `InputFrame`.

use serde::{Deserialize, Serialize};

use crate::types::WeaponId;

/// All possible player actions outside of real-time input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Navigation ---
    /// Open the loadout (weapon selection) screen.
    OpenLoadout,
    /// Open the upgrade (catalog browsing) screen.
    OpenUpgrades,
    /// Return to the main menu from loadout or upgrade.
    ReturnToMenu,

    // --- Armory ---
    /// Select the weapon to take into combat.
    SelectWeapon { weapon_id: WeaponId },
    /// Apply one upgrade step to a weapon.
    UpgradeWeapon { weapon_id: WeaponId },

    // --- Combat ---
    /// Enter combat with the selected weapon.
    StartCombat,
    /// Leave combat and discard its state.
    LeaveCombat,
}

//! Weapon catalog and upgrade rules.
//!
//! The catalog is fixed: weapons are never added or removed, only upgraded.

use serde::{Deserialize, Serialize};

use crate::constants::{RATING_MAX, UPGRADE_ACCURACY_STEP, UPGRADE_DAMAGE_STEP};
use crate::enums::{CategoryFilter, UpgradeOutcome, WeaponCategory};
use crate::types::WeaponId;

/// A weapon and its ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    pub category: WeaponCategory,
    pub damage: u32,
    pub fire_rate: u32,
    /// Accuracy rating, never above 100.
    pub accuracy: u32,
    pub level: u32,
    pub max_level: u32,
}

impl Weapon {
    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }
}

/// The player's weapon catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armory {
    weapons: Vec<Weapon>,
}

impl Default for Armory {
    fn default() -> Self {
        Self {
            weapons: default_catalog(),
        }
    }
}

impl Armory {
    pub fn new(weapons: Vec<Weapon>) -> Self {
        Self { weapons }
    }

    pub fn get(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: WeaponId) -> bool {
        self.get(id).is_some()
    }

    /// All weapons in catalog order.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Weapons passing the category filter, in catalog order.
    pub fn by_category(&self, filter: CategoryFilter) -> impl Iterator<Item = &Weapon> + '_ {
        self.weapons
            .iter()
            .filter(move |w| filter.accepts(w.category))
    }

    /// Apply one upgrade step: +1 level, +5 damage, +2 accuracy (capped at 100).
    /// At max level, or for an unknown id, the catalog is left unchanged.
    pub fn upgrade(&mut self, id: WeaponId) -> UpgradeOutcome {
        let Some(weapon) = self.weapons.iter_mut().find(|w| w.id == id) else {
            return UpgradeOutcome::UnknownWeapon;
        };
        if weapon.is_max_level() {
            return UpgradeOutcome::AtMaxLevel;
        }
        weapon.level += 1;
        weapon.damage += UPGRADE_DAMAGE_STEP;
        weapon.accuracy = (weapon.accuracy + UPGRADE_ACCURACY_STEP).min(RATING_MAX);
        UpgradeOutcome::Upgraded {
            level: weapon.level,
        }
    }
}

/// The stock catalog every session starts with.
pub fn default_catalog() -> Vec<Weapon> {
    let entry = |id, name: &str, category, damage, fire_rate, accuracy, level| Weapon {
        id,
        name: name.to_string(),
        category,
        damage,
        fire_rate,
        accuracy,
        level,
        max_level: 10,
    };
    vec![
        entry(1, "PLASMA RIFLE", WeaponCategory::Assault, 85, 75, 80, 3),
        entry(2, "NEON SNIPER", WeaponCategory::Sniper, 95, 45, 98, 5),
        entry(3, "CYBER SMG", WeaponCategory::Smg, 65, 95, 70, 2),
        entry(4, "ION SHOTGUN", WeaponCategory::Shotgun, 100, 30, 60, 4),
    ]
}

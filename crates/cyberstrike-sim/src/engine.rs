//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the weapon armory, and the
//! screen-mode state machine. It processes player commands, runs the combat
//! systems, and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use tracing::{debug, info};

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::enums::{ScreenMode, Team, UpgradeOutcome};
use cyberstrike_core::events::GameEvent;
use cyberstrike_core::input::InputFrame;
use cyberstrike_core::state::GameStateSnapshot;
use cyberstrike_core::types::{SimTime, WeaponId};
use cyberstrike_core::weapons::Armory;

use crate::scoring::ScoreBoard;
use crate::systems;
use crate::tuning::CombatTuning;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub tuning: CombatTuning,
    /// Weapon catalog to start with; the stock catalog when `None`.
    pub armory: Option<Armory>,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    mode: ScreenMode,
    tuning: CombatTuning,
    armory: Armory,
    selected_weapon: Option<WeaponId>,
    command_queue: VecDeque<PlayerCommand>,
    next_projectile_id: u32,
    combat_session: u64,
    score: ScoreBoard,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            mode: ScreenMode::default(),
            tuning: config.tuning,
            armory: config.armory.unwrap_or_default(),
            selected_weapon: None,
            command_queue: VecDeque::new(),
            next_projectile_id: 1,
            combat_session: 0,
            score: ScoreBoard::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Queued commands are applied first. The input frame is only consumed
    /// while in combat; in every other mode the world does not advance.
    pub fn tick(&mut self, input: &InputFrame) -> GameStateSnapshot {
        self.process_commands();

        if self.mode == ScreenMode::Combat {
            self.run_systems(input);
            self.time.advance();
        }

        self.snapshot()
    }

    /// Get the current screen mode.
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn armory(&self) -> &Armory {
        &self.armory
    }

    /// Number of combats started so far. Changes on every `StartCombat`,
    /// including one that immediately follows a `LeaveCombat`.
    pub fn combat_session(&self) -> u64 {
        self.combat_session
    }

    pub fn selected_weapon(&self) -> Option<WeaponId> {
        self.selected_weapon
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn tuning(&self) -> &CombatTuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for arranging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.mode,
            &self.armory,
            self.selected_weapon,
            &self.score,
            events,
        )
    }

    /// Apply all queued commands now, without advancing the world.
    /// `tick` does this itself; callers use it to observe mode changes
    /// before sampling input for the tick.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands not valid in the current
    /// mode are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::OpenLoadout => {
                if matches!(self.mode, ScreenMode::Menu | ScreenMode::Upgrade) {
                    self.set_mode(ScreenMode::Loadout);
                } else {
                    self.reject(&command);
                }
            }
            PlayerCommand::OpenUpgrades => {
                if matches!(self.mode, ScreenMode::Menu | ScreenMode::Loadout) {
                    self.set_mode(ScreenMode::Upgrade);
                } else {
                    self.reject(&command);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.mode, ScreenMode::Loadout | ScreenMode::Upgrade) {
                    self.set_mode(ScreenMode::Menu);
                } else {
                    self.reject(&command);
                }
            }
            PlayerCommand::SelectWeapon { weapon_id } => {
                let selectable = matches!(self.mode, ScreenMode::Loadout | ScreenMode::Upgrade);
                if selectable && self.armory.contains(weapon_id) {
                    self.selected_weapon = Some(weapon_id);
                    debug!(weapon_id, "weapon selected");
                } else {
                    self.reject(&command);
                }
            }
            PlayerCommand::UpgradeWeapon { weapon_id } => {
                if self.mode == ScreenMode::Combat {
                    self.reject(&command);
                    return;
                }
                let outcome = self.armory.upgrade(weapon_id);
                match outcome {
                    UpgradeOutcome::Upgraded { level } => {
                        debug!(weapon_id, level, "weapon upgraded")
                    }
                    _ => debug!(weapon_id, ?outcome, "upgrade skipped"),
                }
                self.events.push(GameEvent::WeaponUpgrade { weapon_id, outcome });
            }
            PlayerCommand::StartCombat => {
                if self.mode == ScreenMode::Loadout && self.selected_weapon.is_some() {
                    self.start_combat();
                } else {
                    self.reject(&command);
                }
            }
            PlayerCommand::LeaveCombat => {
                if self.mode == ScreenMode::Combat {
                    self.end_combat();
                } else {
                    self.reject(&command);
                }
            }
        }
    }

    /// Reset all combat state to its initial values and enter combat.
    fn start_combat(&mut self) {
        world_setup::setup_combat(&mut self.world);
        self.time = SimTime::default();
        self.score = ScoreBoard::default();
        self.next_projectile_id = 1;
        self.combat_session += 1;
        info!(session = self.combat_session, weapon_id = ?self.selected_weapon, "combat started");
        self.set_mode(ScreenMode::Combat);
    }

    /// Discard all combat state and return to the menu.
    fn end_combat(&mut self) {
        let blue = self.score.team(Team::Blue);
        info!(
            ticks = self.time.tick,
            blue_score = blue.score,
            blue_kills = blue.kills,
            "combat ended"
        );
        self.world.clear();
        self.score = ScoreBoard::default();
        self.time = SimTime::default();
        self.set_mode(ScreenMode::Menu);
    }

    fn set_mode(&mut self, to: ScreenMode) {
        let from = self.mode;
        self.mode = to;
        info!(?from, ?to, "mode changed");
        self.events.push(GameEvent::ModeChanged { from, to });
    }

    fn reject(&self, command: &PlayerCommand) {
        debug!(?command, mode = ?self.mode, "command ignored");
    }

    /// Run all combat systems in order.
    fn run_systems(&mut self, input: &InputFrame) {
        // 0. Clicks queued since the last tick become projectiles
        systems::projectiles::spawn_from_clicks(
            &mut self.world,
            &input.clicks,
            &mut self.next_projectile_id,
            &self.tuning,
        );
        // 1. Player movement and aim
        systems::player_movement::run(&mut self.world, input, &self.tuning);
        // 2. Projectile advance + out-of-arena removal
        systems::projectiles::advance(&mut self.world, &self.tuning, &mut self.despawn_buffer);
        // 3. Enemy pursuit
        systems::pursuit::run(&mut self.world, &self.tuning);
        // 4. Collision resolution (hits, kills)
        systems::collision::run(
            &mut self.world,
            &self.tuning,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Capture points
        systems::capture::run(&mut self.world, &self.tuning, &mut self.score, &mut self.events);
    }
}

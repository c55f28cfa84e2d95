//! Simulation engine: the top-level controller of a duel.
//!
//! `SimulationEngine` owns the hecs world (the actor registry), the
//! scheduler, the session and the wand, processes host commands, resolves
//! contacts and produces `GameStateSnapshot`s. Completely headless, so it
//! can be driven deterministically from tests.

use std::collections::VecDeque;

use glam::Mat4;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wizard_core::commands::PlayerCommand;
use wizard_core::enums::{ActorTag, CastPhase, ContactOutcome, GamePhase, RemovalReason};
use wizard_core::error::SimError;
use wizard_core::events::{ContactEvent, SceneEvent, UiEvent};
use wizard_core::state::GameStateSnapshot;
use wizard_core::types::{secs_to_ticks, ActorHandle, SimTime};

pub use wizard_core::config::SimConfig;

use crate::scheduler::{Scheduler, Task};
use crate::session::GameSession;
use crate::systems;
use crate::systems::casting::Wand;
use crate::world_setup;

/// The simulation engine. Owns the actor registry and all game state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    scheduler: Scheduler<Task>,
    session: GameSession,
    wand: Wand,
    viewer: Mat4,
    player: Option<ActorHandle>,
    command_queue: VecDeque<PlayerCommand>,
    scene_events: Vec<SceneEvent>,
    ui_events: Vec<UiEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            scheduler: Scheduler::new(),
            session: GameSession::new(),
            wand: Wand::new(),
            viewer: Mat4::IDENTITY,
            player: None,
            command_queue: VecDeque::new(),
            scene_events: Vec::new(),
            ui_events: Vec::new(),
        }
    }

    /// Validate the config before building the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        // Host time stops while the app is in the background.
        if !self.session.is_backgrounded() {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Handle a contact from the host physics step, immediately.
    ///
    /// Contacts naming an actor that is already gone are logged and dropped.
    pub fn handle_contact(&mut self, contact: ContactEvent) -> ContactOutcome {
        let result = systems::collision::resolve(
            &mut self.world,
            &mut self.session,
            &mut self.scheduler,
            &self.config,
            &contact,
            &mut self.scene_events,
            &mut self.ui_events,
        );
        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log_ignored("contact", &err);
                ContactOutcome::Irrelevant
            }
        }
    }

    /// Build a snapshot without advancing, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let scene_events = std::mem::take(&mut self.scene_events);
        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.session,
            &self.wand,
            scene_events,
            ui_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn cast_phase(&self) -> CastPhase {
        self.wand.phase()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    pub fn is_alive(&self) -> bool {
        self.session.is_alive()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn wand(&self) -> &Wand {
        &self.wand
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The player's body, once a session has started.
    pub fn player(&self) -> Option<ActorHandle> {
        self.player
    }

    /// Get a read-only reference to the actor registry.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Live actors carrying `tag`.
    pub fn actors(&self, tag: ActorTag) -> Vec<ActorHandle> {
        world_setup::actors_with_tag(&self.world, tag)
    }

    fn spawn_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.config.spawn_interval_secs)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PressStart => {
                if self.session.phase() == GamePhase::Dead {
                    log::debug!("press start ignored on the death screen");
                    return;
                }
                systems::casting::press_start(
                    &mut self.world,
                    &mut self.wand,
                    &self.viewer,
                    self.scheduler.now(),
                    &mut self.scene_events,
                );
            }
            PlayerCommand::PressEnd => {
                if let Err(err) = systems::casting::press_end(
                    &mut self.world,
                    &mut self.wand,
                    &mut self.scheduler,
                    &self.viewer,
                    &self.config,
                    &mut self.scene_events,
                ) {
                    log_ignored("press end", &err);
                }
            }
            PlayerCommand::SetViewerTransform { transform } => {
                self.viewer = transform;
                systems::movement::sync_attached(&mut self.world, &self.viewer);
            }
            PlayerCommand::StartSession => {
                if self.session.is_started() {
                    log::debug!("start ignored: session already started");
                    return;
                }
                self.ensure_player();
                let interval = self.spawn_interval_ticks();
                self.session
                    .start(&mut self.scheduler, interval, &mut self.ui_events);
            }
            PlayerCommand::Restart => {
                if self.session.phase() != GamePhase::Dead {
                    log::debug!("restart ignored outside the death screen");
                    return;
                }
                self.clear_projectiles();
                self.ensure_player();
                let interval = self.spawn_interval_ticks();
                self.session
                    .restart(&mut self.scheduler, interval, &mut self.ui_events);
            }
            PlayerCommand::PlaceTarget { position } => {
                let target =
                    world_setup::spawn_target(&mut self.world, position, &mut self.scene_events);
                log::debug!("placed target {target} at {position}");
            }
            PlayerCommand::EnterBackground => {
                self.session.enter_background(&mut self.scheduler);
            }
            PlayerCommand::EnterForeground => {
                let interval = self.spawn_interval_ticks();
                self.session
                    .enter_foreground(&mut self.scheduler, interval);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Scheduled work: spawner ticks and lifespans
        for task in self.scheduler.advance() {
            match task {
                Task::SpawnEnemy => {
                    systems::spawner::run(
                        &mut self.world,
                        &mut self.rng,
                        &mut self.session,
                        &mut self.scheduler,
                        &self.viewer,
                        &self.config,
                        &mut self.scene_events,
                        &mut self.ui_events,
                    );
                }
                Task::Expire(actor) => {
                    systems::expiry::run(&mut self.world, actor, &mut self.scene_events);
                }
            }
        }
        // 2. Movement integration
        if self.config.kinematics {
            systems::movement::run(&mut self.world);
        }
    }

    fn ensure_player(&mut self) {
        let alive = self
            .player
            .is_some_and(|player| world_setup::entity_of(&self.world, player).is_ok());
        if !alive {
            let player =
                world_setup::spawn_player(&mut self.world, &self.viewer, &mut self.scene_events);
            log::debug!("spawned player body {player}");
            self.player = Some(player);
        }
    }

    /// Remove enemy projectiles and fired spells ahead of a new run. A spell
    /// still held on the wand stays.
    fn clear_projectiles(&mut self) {
        let held = self.wand.channelled_spell();
        let mut doomed = self.actors(ActorTag::EnemyProjectile);
        doomed.extend(
            self.actors(ActorTag::Spell)
                .into_iter()
                .filter(|spell| Some(*spell) != held),
        );
        for actor in doomed {
            if let Err(err) = world_setup::remove_actor(
                &mut self.world,
                actor,
                RemovalReason::Reset,
                &mut self.scene_events,
            ) {
                log_ignored("reset", &err);
            }
        }
    }
}

fn log_ignored(context: &str, err: &SimError) {
    match err {
        SimError::InvalidState { .. } => log::debug!("{context} ignored: {err}"),
        _ if err.is_ignorable() => log::warn!("{context} ignored: {err}"),
        _ => log::error!("{context} failed: {err}"),
    }
}

//! Game session state: score, alive/dead, restart, and the spawner's lifetime.
//!
//! The session owns the cancel token of the repeating spawn task, so every
//! path that stops play (death, backgrounding) disarms the spawner here.

use wizard_core::enums::GamePhase;
use wizard_core::events::UiEvent;
use wizard_core::state::SessionView;

use crate::scheduler::{Scheduler, Task, TaskHandle};

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    score: u32,
    best_score: u32,
    started: bool,
    alive: bool,
    /// Set while the death screen is up.
    final_score: Option<u32>,
    backgrounded: bool,
    spawner: Option<TaskHandle>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn is_backgrounded(&self) -> bool {
        self.backgrounded
    }

    pub fn spawner_armed(&self) -> bool {
        self.spawner.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        match (self.started, self.alive) {
            (false, _) => GamePhase::NotStarted,
            (true, true) => GamePhase::Playing,
            (true, false) => GamePhase::Dead,
        }
    }

    /// Whether the spawner should be producing projectiles right now.
    pub fn is_playing(&self) -> bool {
        self.started && self.alive
    }

    /// Begin a fresh run and arm the spawner.
    pub fn start(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        spawn_interval_ticks: u64,
        ui_events: &mut Vec<UiEvent>,
    ) {
        self.started = true;
        self.alive = true;
        self.score = 0;
        self.final_score = None;

        self.disarm(scheduler);
        if !self.backgrounded {
            self.arm(scheduler, spawn_interval_ticks);
        }

        log::info!("session started (best score {})", self.best_score);
        ui_events.push(UiEvent::SessionStarted);
        ui_events.push(UiEvent::ScoreChanged { score: 0 });
    }

    /// Same as `start`, called from the death screen.
    pub fn restart(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        spawn_interval_ticks: u64,
        ui_events: &mut Vec<UiEvent>,
    ) {
        log::info!("restarting after final score {:?}", self.final_score);
        self.start(scheduler, spawn_interval_ticks, ui_events);
    }

    /// The player was struck. Returns `false` if the run was already over,
    /// so simultaneous hits only end the run once.
    pub fn on_player_hit(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        ui_events: &mut Vec<UiEvent>,
    ) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.alive = false;
        self.disarm(scheduler);
        self.final_score = Some(self.score);
        self.best_score = self.best_score.max(self.score);

        log::info!(
            "player hit: final score {}, best {}",
            self.score,
            self.best_score
        );
        ui_events.push(UiEvent::PlayerHit {
            final_score: self.score,
            best_score: self.best_score,
        });
        true
    }

    /// One spawn tick elapsed while playing.
    pub fn record_spawn(&mut self, ui_events: &mut Vec<UiEvent>) {
        self.award_point(ui_events);
    }

    /// Add one point (spawn ticks, and target kills when enabled).
    pub fn award_point(&mut self, ui_events: &mut Vec<UiEvent>) {
        self.score += 1;
        ui_events.push(UiEvent::ScoreChanged { score: self.score });
    }

    pub fn enter_background(&mut self, scheduler: &mut Scheduler<Task>) {
        self.backgrounded = true;
        self.disarm(scheduler);
        log::info!("entered background, spawner disarmed");
    }

    pub fn enter_foreground(&mut self, scheduler: &mut Scheduler<Task>, spawn_interval_ticks: u64) {
        self.backgrounded = false;
        if self.is_playing() {
            self.arm(scheduler, spawn_interval_ticks);
            log::info!("entered foreground, spawner re-armed");
        } else {
            log::info!("entered foreground");
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            score: self.score,
            best_score: self.best_score,
            started: self.started,
            alive: self.alive,
            final_score: self.final_score,
            spawner_armed: self.spawner_armed(),
            backgrounded: self.backgrounded,
        }
    }

    fn arm(&mut self, scheduler: &mut Scheduler<Task>, spawn_interval_ticks: u64) {
        if self.spawner.is_none() {
            self.spawner = Some(scheduler.schedule_repeating(spawn_interval_ticks, Task::SpawnEnemy));
        }
    }

    fn disarm(&mut self, scheduler: &mut Scheduler<Task>) {
        if let Some(handle) = self.spawner.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u64 = 10;

    fn started() -> (GameSession, Scheduler<Task>, Vec<UiEvent>) {
        let mut session = GameSession::new();
        let mut scheduler = Scheduler::new();
        let mut events = Vec::new();
        session.start(&mut scheduler, INTERVAL, &mut events);
        (session, scheduler, events)
    }

    #[test]
    fn new_session_is_title_screen() {
        let session = GameSession::new();
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert!(!session.spawner_armed());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn start_arms_spawner() {
        let (session, scheduler, events) = started();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(session.spawner_armed());
        assert_eq!(scheduler.len(), 1);
        assert_eq!(events[0], UiEvent::SessionStarted);
    }

    #[test]
    fn hit_is_idempotent() {
        let (mut session, mut scheduler, mut events) = started();
        session.award_point(&mut events);
        assert!(session.on_player_hit(&mut scheduler, &mut events));
        assert!(!session.on_player_hit(&mut scheduler, &mut events));

        let hits = events
            .iter()
            .filter(|e| matches!(e, UiEvent::PlayerHit { .. }))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(session.phase(), GamePhase::Dead);
        assert_eq!(session.final_score(), Some(1));
        assert!(!session.spawner_armed());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn hit_before_start_is_ignored() {
        let mut session = GameSession::new();
        let mut scheduler = Scheduler::new();
        let mut events = Vec::new();
        assert!(!session.on_player_hit(&mut scheduler, &mut events));
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert!(events.is_empty());
    }

    #[test]
    fn best_score_survives_restart() {
        let (mut session, mut scheduler, mut events) = started();
        for _ in 0..3 {
            session.record_spawn(&mut events);
        }
        session.on_player_hit(&mut scheduler, &mut events);
        session.restart(&mut scheduler, INTERVAL, &mut events);
        session.record_spawn(&mut events);
        session.on_player_hit(&mut scheduler, &mut events);

        assert_eq!(session.final_score(), Some(1));
        assert_eq!(session.best_score(), 3);
    }

    #[test]
    fn restart_clears_death_screen() {
        let (mut session, mut scheduler, mut events) = started();
        session.on_player_hit(&mut scheduler, &mut events);
        session.restart(&mut scheduler, INTERVAL, &mut events);
        assert_eq!(session.final_score(), None);
        assert_eq!(session.score(), 0);
        assert!(session.is_alive());
        assert!(session.spawner_armed());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn background_disarms_and_foreground_rearms_once() {
        let (mut session, mut scheduler, _) = started();
        session.enter_background(&mut scheduler);
        assert!(!session.spawner_armed());
        assert!(scheduler.is_empty());

        session.enter_foreground(&mut scheduler, INTERVAL);
        session.enter_foreground(&mut scheduler, INTERVAL);
        assert!(session.spawner_armed());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn foreground_does_not_arm_when_dead_or_unstarted() {
        let mut session = GameSession::new();
        let mut scheduler = Scheduler::new();
        session.enter_background(&mut scheduler);
        session.enter_foreground(&mut scheduler, INTERVAL);
        assert!(!session.spawner_armed());

        let (mut session, mut scheduler, mut events) = started();
        session.on_player_hit(&mut scheduler, &mut events);
        session.enter_background(&mut scheduler);
        session.enter_foreground(&mut scheduler, INTERVAL);
        assert!(!session.spawner_armed());
    }
}

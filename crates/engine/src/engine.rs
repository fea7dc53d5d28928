//! GameEngine: hosts a [`Session`] and the timers its transitions request.
//!
//! Front-ends call [`GameEngine::click`], [`GameEngine::select_level`] and
//! [`GameEngine::restart`] for user intents and [`GameEngine::advance`] with
//! real elapsed time. Every session change goes through the core reducer; the
//! engine only owns the RNG and the timer handles.

use tracing::{debug, info};

use crate::clock::{Clock, Fired, TimerHandle, TimerKind};
use crate::core::{
    shuffled_deck, Effect, GameSnapshot, RandomSource, Session, SessionAction, SimpleRng,
};
use crate::types::{CardId, GameAction, Level, MISMATCH_DELAY_MS, SYMBOLS, TICK_MS};

pub struct GameEngine<R: RandomSource = SimpleRng> {
    session: Session,
    rng: R,
    clock: Clock,
    ticker: Option<TimerHandle>,
    hide: Option<TimerHandle>,
}

impl GameEngine<SimpleRng> {
    /// Engine with a deterministic deck for the given seed.
    pub fn seeded(level: Level, seed: u32) -> Self {
        Self::new(level, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Deal a shuffled deck and wait for the first click.
    pub fn new(level: Level, mut rng: R) -> Self {
        let deck = shuffled_deck(&SYMBOLS, &mut rng);
        Self::from_session(Session::new(level, deck), rng)
    }

    /// Host an existing session. `rng` deals the decks of later restarts.
    pub fn from_session(session: Session, rng: R) -> Self {
        Self {
            session,
            rng,
            clock: Clock::new(),
            ticker: None,
            hide: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The countdown ticker is armed.
    pub fn ticker_armed(&self) -> bool {
        self.ticker.is_some_and(|h| self.clock.is_pending(h))
    }

    /// A mismatch hide is outstanding.
    pub fn hide_pending(&self) -> bool {
        self.hide.is_some_and(|h| self.clock.is_pending(h))
    }

    pub fn click(&mut self, id: CardId) -> bool {
        self.dispatch(SessionAction::Click(id))
    }

    pub fn select_level(&mut self, level: Level) -> bool {
        self.dispatch(SessionAction::SelectLevel(level))
    }

    /// Replace the session with a freshly shuffled one at the current level.
    pub fn restart(&mut self) -> bool {
        let deck = shuffled_deck(&SYMBOLS, &mut self.rng);
        self.dispatch(SessionAction::Restart { deck })
    }

    /// Apply a front-end intent.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(id) => self.click(id),
            GameAction::SelectLevel(level) => self.select_level(level),
            GameAction::Restart => self.restart(),
        }
    }

    /// Advance time, firing due timers in order. Returns true if the session changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let until = self.clock.now_ms() + u64::from(elapsed_ms);
        let mut changed = false;
        while let Some(fired) = self.clock.pop_due(until) {
            changed |= self.on_timer(fired);
        }
        changed
    }

    /// Cancel every outstanding timer; the host is going away.
    pub fn shutdown(&mut self) {
        self.clock.cancel_all();
        self.ticker = None;
        self.hide = None;
        debug!("engine shut down");
    }

    fn on_timer(&mut self, fired: Fired) -> bool {
        match fired.kind {
            TimerKind::Tick => self.dispatch(SessionAction::Tick),
            TimerKind::HideMismatch { generation } => {
                if self.hide == Some(fired.handle) {
                    self.hide = None;
                }
                self.dispatch(SessionAction::HideMismatch { generation })
            }
        }
    }

    fn dispatch(&mut self, action: SessionAction) -> bool {
        let label = action_label(&action);
        let restarting = matches!(action, SessionAction::Restart { .. });
        let before = self.session.status();

        let step = self.session.reduce(action);
        self.session = step.session;
        for effect in step.effects {
            self.run_effect(effect);
        }

        if step.changed {
            debug!(
                action = label,
                score = self.session.score(),
                elapsed = self.session.elapsed_secs(),
                phase = ?self.session.phase(),
                "session updated"
            );
        }

        let after = self.session.status();
        if before != after {
            info!(
                from = ?before,
                to = ?after,
                level = self.session.level().as_str(),
                score = self.session.score(),
                elapsed = self.session.elapsed_secs(),
                "round status changed"
            );
        }
        if restarting {
            info!(generation = self.session.generation(), "round restarted");
        }

        step.changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartTicker => {
                if let Some(h) = self.ticker.take() {
                    self.clock.cancel(h);
                }
                self.ticker = Some(self.clock.repeat(TICK_MS, TimerKind::Tick));
            }
            Effect::StopTicker => {
                if let Some(h) = self.ticker.take() {
                    self.clock.cancel(h);
                }
            }
            Effect::ScheduleHide { generation, .. } => {
                if let Some(h) = self.hide.take() {
                    self.clock.cancel(h);
                }
                self.hide = Some(
                    self.clock
                        .once(MISMATCH_DELAY_MS, TimerKind::HideMismatch { generation }),
                );
            }
            Effect::CancelHide => {
                if let Some(h) = self.hide.take() {
                    self.clock.cancel(h);
                }
            }
        }
    }
}

/// Log name of a reducer input; player intents share [`GameAction::as_str`].
fn action_label(action: &SessionAction) -> &'static str {
    match action {
        SessionAction::Click(id) => GameAction::Click(*id).as_str(),
        SessionAction::SelectLevel(level) => GameAction::SelectLevel(*level).as_str(),
        SessionAction::Restart { .. } => GameAction::Restart.as_str(),
        SessionAction::Tick => "tick",
        SessionAction::HideMismatch { .. } => "hideMismatch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_deck, is_well_formed, Phase};
    use crate::types::GameStatus;

    /// Unshuffled deck so the tests know the pairs: 2i and 2i+1.
    fn engine(level: Level) -> GameEngine {
        GameEngine::from_session(Session::new(level, build_deck(&SYMBOLS)), SimpleRng::new(1))
    }

    #[test]
    fn test_new_engine_is_idle() {
        let e = GameEngine::seeded(Level::Normal, 42);
        assert_eq!(e.session().status(), GameStatus::NotStarted);
        assert_eq!(e.session().duration_secs(), 90);
        assert!(is_well_formed(e.session().cards()));
        assert!(!e.ticker_armed());
        assert_eq!(e.clock().pending(), 0);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = GameEngine::seeded(Level::Easy, 7);
        let b = GameEngine::seeded(Level::Easy, 7);
        assert_eq!(a.session().cards(), b.session().cards());
    }

    #[test]
    fn test_time_does_not_pass_before_first_click() {
        let mut e = engine(Level::Easy);
        assert!(!e.advance(5000));
        assert_eq!(e.session().elapsed_secs(), 0);
    }

    #[test]
    fn test_first_click_arms_ticker() {
        let mut e = engine(Level::Easy);
        assert!(e.click(0));
        assert!(e.ticker_armed());

        e.advance(999);
        assert_eq!(e.session().elapsed_secs(), 0);
        e.advance(1);
        assert_eq!(e.session().elapsed_secs(), 1);
        e.advance(2500);
        assert_eq!(e.session().elapsed_secs(), 3);
    }

    #[test]
    fn test_mismatch_hides_after_delay() {
        let mut e = engine(Level::Easy);
        e.click(0);
        e.click(2);
        assert!(e.snapshot().input_locked);
        assert!(e.hide_pending());

        e.advance(999);
        assert!(e.snapshot().input_locked);

        e.advance(1);
        let snap = e.snapshot();
        assert!(!snap.input_locked);
        assert!(!snap.cards[0].face_up);
        assert!(!snap.cards[2].face_up);
        assert!(!e.hide_pending());
        assert_eq!(e.session().phase(), Phase::Ready);
    }

    #[test]
    fn test_match_needs_no_timer() {
        let mut e = engine(Level::Easy);
        e.click(6);
        e.click(7);
        assert_eq!(e.session().score(), 1);
        assert!(!e.hide_pending());
        assert!(!e.snapshot().input_locked);
    }

    #[test]
    fn test_round_ends_at_duration() {
        let mut e = engine(Level::Hard);
        for pair in 0..8u32 {
            e.click(pair * 2);
            e.click(pair * 2 + 1);
        }
        e.advance(44_000);
        assert_eq!(e.session().status(), GameStatus::Running);
        e.advance(1_000);
        assert_eq!(e.session().status(), GameStatus::Won);
        assert!(!e.ticker_armed());
        assert_eq!(e.clock().pending(), 0);

        // The countdown stays put afterwards.
        e.advance(10_000);
        assert_eq!(e.session().elapsed_secs(), 45);
    }

    #[test]
    fn test_round_lost_with_missing_pairs() {
        let mut e = engine(Level::Hard);
        e.click(0);
        e.click(1);
        e.advance(45_000);
        let report = e.session().final_report().unwrap();
        assert_eq!(e.session().status(), GameStatus::Lost);
        assert_eq!(report.score, 1);
        assert_eq!(report.elapsed_secs, 45);
    }

    #[test]
    fn test_restart_cancels_timers() {
        let mut e = engine(Level::Easy);
        e.click(0);
        e.click(2);
        assert!(e.hide_pending());

        assert!(e.restart());
        assert!(!e.hide_pending());
        assert!(!e.ticker_armed());
        assert_eq!(e.clock().pending(), 0);
        assert_eq!(e.session().status(), GameStatus::NotStarted);
        assert_eq!(e.session().score(), 0);
        assert!(is_well_formed(e.session().cards()));
        assert!(e.session().cards().iter().all(|c| !c.face_up && !c.matched));

        // Nothing left to fire into the new session.
        assert!(!e.advance(5_000));
        assert_eq!(e.session().elapsed_secs(), 0);
    }

    #[test]
    fn test_restart_keeps_level() {
        let mut e = engine(Level::Easy);
        e.select_level(Level::Hard);
        e.restart();
        assert_eq!(e.session().level(), Level::Hard);
        assert_eq!(e.session().duration_secs(), 45);
    }

    #[test]
    fn test_level_change_rearms_ticker() {
        let mut e = engine(Level::Easy);
        e.click(0);
        e.advance(1500);
        assert_eq!(e.session().elapsed_secs(), 1);

        e.select_level(Level::Normal);
        assert_eq!(e.session().elapsed_secs(), 0);
        assert!(e.ticker_armed());

        e.advance(999);
        assert_eq!(e.session().elapsed_secs(), 0);
        e.advance(1);
        assert_eq!(e.session().elapsed_secs(), 1);
    }

    #[test]
    fn test_level_change_keeps_pending_hide() {
        let mut e = engine(Level::Easy);
        e.click(0);
        e.click(2);
        e.select_level(Level::Hard);
        assert!(e.hide_pending());

        e.advance(1000);
        assert!(!e.snapshot().input_locked);
    }

    #[test]
    fn test_shutdown_cancels_everything() {
        let mut e = engine(Level::Easy);
        e.click(0);
        e.click(2);
        e.shutdown();
        assert_eq!(e.clock().pending(), 0);
        assert!(!e.advance(10_000));
        assert_eq!(e.session().elapsed_secs(), 0);
    }

    #[test]
    fn test_action_labels_match_game_actions() {
        assert_eq!(action_label(&SessionAction::Click(3)), "click");
        assert_eq!(
            action_label(&SessionAction::SelectLevel(Level::Hard)),
            GameAction::SelectLevel(Level::Hard).as_str()
        );
        assert_eq!(
            action_label(&SessionAction::Restart { deck: Vec::new() }),
            "restart"
        );
        assert_eq!(action_label(&SessionAction::Tick), "tick");
        assert_eq!(
            action_label(&SessionAction::HideMismatch { generation: 0 }),
            "hideMismatch"
        );
    }

    #[test]
    fn test_apply_action() {
        let mut e = engine(Level::Easy);
        assert!(e.apply_action(GameAction::SelectLevel(Level::Normal)));
        assert!(e.apply_action(GameAction::Click(0)));
        assert!(!e.apply_action(GameAction::Click(0)));
        assert!(e.apply_action(GameAction::Restart));
        assert_eq!(e.session().level(), Level::Normal);
    }
}

//! Session module - the round state machine
//!
//! A [`Session`] is a value. Every transition goes through [`Session::reduce`],
//! which leaves the input untouched and returns the next session together with
//! the timer [`Effect`]s the host must apply. The reducer never touches a clock
//! itself, so every rule here is testable without waiting.
//!
//! # Phases
//!
//! ```text
//! Idle --click--> Ready/AwaitingSecondCard
//! Ready --click--> AwaitingSecondCard --click--> Ready          (match)
//!                                     --click--> Evaluating     (mismatch)
//! Evaluating --hide--> Ready
//! any running phase --tick at duration--> Finished
//! ```

use arrayvec::ArrayVec;

use crate::deck::is_well_formed;
use crate::level::duration_for;
use crate::snapshot::{CardView, GameSnapshot};
use crate::types::*;

/// Where the round is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not started; the countdown starts on the first click.
    Idle,
    /// Running with no card pending.
    Ready,
    /// Exactly one unmatched card is face-up.
    AwaitingSecondCard { first: CardId },
    /// Two mismatched cards are face-up until the hide delay fires.
    Evaluating { first: CardId, second: CardId },
    /// Countdown elapsed.
    Finished(FinalReport),
}

/// Timer work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the repeating one-second ticker.
    StartTicker,
    /// Cancel the repeating ticker.
    StopTicker,
    /// Arm the one-shot mismatch timer ([`MISMATCH_DELAY_MS`]).
    ScheduleHide {
        generation: u32,
        first: CardId,
        second: CardId,
    },
    /// Cancel an outstanding mismatch timer, if any.
    CancelHide,
}

/// At most four effects come out of one transition.
pub type Effects = ArrayVec<Effect, 4>;

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// The player clicked a card.
    Click(CardId),
    /// One countdown second elapsed.
    Tick,
    /// The mismatch delay scheduled under `generation` fired.
    HideMismatch { generation: u32 },
    /// The player picked a level.
    SelectLevel(Level),
    /// Replace the session with a fresh one dealt from `deck`.
    Restart { deck: Vec<Card> },
}

/// Result of a transition.
#[derive(Debug, Clone)]
pub struct Step {
    pub session: Session,
    pub effects: Effects,
    /// False when the action was a no-op.
    pub changed: bool,
}

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    level: Level,
    duration_secs: u32,
    elapsed_secs: u32,
    score: u32,
    deck: Vec<Card>,
    phase: Phase,
    /// Bumped whenever the session is replaced; stale mismatch callbacks carry an older value.
    generation: u32,
}

impl Session {
    /// Fresh, idle session dealt from `deck`.
    pub fn new(level: Level, deck: Vec<Card>) -> Self {
        debug_assert!(is_well_formed(&deck));

        Self {
            level,
            duration_secs: duration_for(level),
            elapsed_secs: 0,
            score: 0,
            deck,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.duration_secs.saturating_sub(self.elapsed_secs)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of pairs in the deck, i.e. the winning score.
    pub fn pair_count(&self) -> u32 {
        (self.deck.len() / 2) as u32
    }

    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Countdown is live.
    pub fn running(&self) -> bool {
        matches!(
            self.phase,
            Phase::Ready | Phase::AwaitingSecondCard { .. } | Phase::Evaluating { .. }
        )
    }

    /// The single face-up unmatched card while the player picks a second one.
    pub fn pending_first_card(&self) -> Option<CardId> {
        match self.phase {
            Phase::AwaitingSecondCard { first } => Some(first),
            _ => None,
        }
    }

    /// Clicks are currently ignored: a pair is under evaluation or time is up.
    pub fn input_locked(&self) -> bool {
        matches!(self.phase, Phase::Evaluating { .. } | Phase::Finished(_))
            || self.elapsed_secs >= self.duration_secs
    }

    pub fn final_report(&self) -> Option<FinalReport> {
        match self.phase {
            Phase::Finished(report) => Some(report),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Idle => GameStatus::NotStarted,
            Phase::Finished(report) => report.status(),
            _ => GameStatus::Running,
        }
    }

    /// Every pair has been found.
    pub fn all_matched(&self) -> bool {
        self.score == self.pair_count()
    }

    /// Apply one action, returning the next session and the effects to run.
    pub fn reduce(&self, action: SessionAction) -> Step {
        let mut next = self.clone();
        let mut effects = Effects::new();

        let changed = match action {
            SessionAction::Click(id) => next.click(id, &mut effects),
            SessionAction::Tick => next.tick(&mut effects),
            SessionAction::HideMismatch { generation } => next.hide_mismatch(generation),
            SessionAction::SelectLevel(level) => next.select_level(level, &mut effects),
            SessionAction::Restart { deck } => {
                let generation = next.generation.wrapping_add(1);
                next = Session::new(self.level, deck);
                next.generation = generation;
                effects.push(Effect::StopTicker);
                effects.push(Effect::CancelHide);
                true
            }
        };

        Step {
            session: next,
            effects,
            changed,
        }
    }

    fn index_of(&self, id: CardId) -> Option<usize> {
        self.deck.iter().position(|c| c.id == id)
    }

    fn click(&mut self, id: CardId, effects: &mut Effects) -> bool {
        if matches!(self.phase, Phase::Finished(_) | Phase::Evaluating { .. })
            || self.elapsed_secs >= self.duration_secs
        {
            return false;
        }

        let mut changed = false;
        if self.phase == Phase::Idle {
            self.phase = Phase::Ready;
            effects.push(Effect::StartTicker);
            changed = true;
        }

        let Some(index) = self.index_of(id) else {
            return changed;
        };
        if !self.deck[index].is_selectable() {
            return changed;
        }

        self.deck[index].face_up = true;

        match self.phase {
            Phase::Ready => {
                self.phase = Phase::AwaitingSecondCard { first: id };
            }
            Phase::AwaitingSecondCard { first } => {
                let Some(first_index) = self.index_of(first) else {
                    self.phase = Phase::AwaitingSecondCard { first: id };
                    return true;
                };

                if self.deck[first_index].symbol == self.deck[index].symbol {
                    self.deck[first_index].matched = true;
                    self.deck[index].matched = true;
                    self.score = (self.score + 1).min(self.pair_count());
                    self.phase = Phase::Ready;
                } else {
                    self.phase = Phase::Evaluating { first, second: id };
                    effects.push(Effect::ScheduleHide {
                        generation: self.generation,
                        first,
                        second: id,
                    });
                }
            }
            // Idle was promoted above; Evaluating and Finished returned early.
            Phase::Idle | Phase::Evaluating { .. } | Phase::Finished(_) => {}
        }

        true
    }

    fn tick(&mut self, effects: &mut Effects) -> bool {
        if !self.running() {
            return false;
        }

        self.elapsed_secs = (self.elapsed_secs + 1).min(self.duration_secs);
        if self.elapsed_secs < self.duration_secs {
            return true;
        }

        // A pair still under evaluation is resolved now; its timer would be canceled.
        if let Phase::Evaluating { first, second } = self.phase {
            self.hide(first, second);
            effects.push(Effect::CancelHide);
        }

        let outcome = if self.all_matched() {
            Outcome::Won
        } else {
            Outcome::Lost
        };
        self.phase = Phase::Finished(FinalReport {
            outcome,
            elapsed_secs: self.elapsed_secs,
            score: self.score,
        });
        effects.push(Effect::StopTicker);
        true
    }

    fn hide_mismatch(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            return false;
        }

        let Phase::Evaluating { first, second } = self.phase else {
            return false;
        };
        self.hide(first, second);
        self.phase = Phase::Ready;
        true
    }

    fn hide(&mut self, first: CardId, second: CardId) {
        for card in self.deck.iter_mut() {
            if (card.id == first || card.id == second) && !card.matched {
                card.face_up = false;
            }
        }
    }

    fn select_level(&mut self, level: Level, effects: &mut Effects) -> bool {
        // A finished round keeps its clock so it agrees with the report;
        // the new level takes effect on restart.
        if matches!(self.phase, Phase::Finished(_)) {
            let changed = self.level != level;
            self.level = level;
            return changed;
        }

        let duration_secs = duration_for(level);
        let changed =
            self.level != level || self.duration_secs != duration_secs || self.elapsed_secs != 0;

        self.level = level;
        self.duration_secs = duration_secs;
        self.elapsed_secs = 0;

        // Re-arm so the next tick is a full second after the change.
        if self.running() {
            effects.push(Effect::StopTicker);
            effects.push(Effect::StartTicker);
        }

        changed
    }

    /// Fill a reusable snapshot for renderers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.deck.iter().map(CardView::from));
        out.score = self.score;
        out.pair_count = self.pair_count();
        out.level = self.level;
        out.duration_secs = self.duration_secs;
        out.elapsed_secs = self.elapsed_secs;
        out.remaining_secs = self.remaining_secs();
        out.status = self.status();
        out.input_locked = self.input_locked();
        out.final_report = self.final_report();
        out.generation = self.generation;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

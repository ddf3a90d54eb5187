use std::ops::RangeInclusive;
use std::time::SystemTime;

use log::trace;
use uuid::Uuid;

use super::{hint, Comparison, Difficulty, ScoreRecord, TimerState};

pub const TARGET_RANGE: RangeInclusive<u32> = 1..=100;

/// State of one round, from the difficulty choice until a win or the last
/// chance is spent.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub round_id: Uuid,
    pub difficulty: Difficulty,
    target: u32,
    chances_remaining: u32,
    hint_used: bool,
    last_guess: Option<u32>,
    timer_state: TimerState,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, target: u32) -> Self {
        debug_assert!(TARGET_RANGE.contains(&target));
        Self {
            round_id: Uuid::new_v4(),
            difficulty,
            target,
            chances_remaining: difficulty.chances(),
            hint_used: false,
            last_guess: None,
            timer_state: TimerState::default(),
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn chances_remaining(&self) -> u32 {
        self.chances_remaining
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn is_exhausted(&self) -> bool {
        self.chances_remaining == 0
    }

    /// Attempts including the one being made now.
    pub fn attempts_used(&self) -> u32 {
        self.difficulty.chances() - self.chances_remaining + 1
    }

    /// A hint needs a previous wrong guess to measure from, and there is
    /// only one per round.
    pub fn can_offer_hint(&self) -> bool {
        self.last_guess.is_some() && !self.hint_used
    }

    /// Consumes the round's hint. Returns `None` if it is already spent or
    /// there is no wrong guess yet.
    pub fn take_hint(&mut self) -> Option<String> {
        if !self.can_offer_hint() {
            return None;
        }
        let last_guess = self.last_guess?;
        self.hint_used = true;
        Some(hint(i64::from(self.target), i64::from(last_guess)))
    }

    /// Evaluates a guess. A miss spends one chance; a match does not.
    pub fn guess(&mut self, guess: u32) -> Comparison {
        let comparison = Comparison::of(i64::from(guess), i64::from(self.target));
        trace!(
            target: "session",
            "round {}: guess {} is {:?} ({} chances left before)",
            self.round_id,
            guess,
            comparison,
            self.chances_remaining
        );
        if comparison != Comparison::Equal {
            self.last_guess = Some(guess);
            self.chances_remaining = self.chances_remaining.saturating_sub(1);
        }
        comparison
    }

    /// Stops the clock and produces the record for this win.
    pub fn finish(&mut self, now: SystemTime) -> ScoreRecord {
        self.timer_state = self.timer_state.ended(now);
        ScoreRecord::from_elapsed(self.timer_state.elapsed(), self.attempts_used())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_has_five_chances() {
        let difficulty = Difficulty::from_choice("2").unwrap();
        let session = GameSession::new(difficulty, 42);
        assert_eq!(session.chances_remaining(), 5);
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_misses_spend_chances_until_exhausted() {
        let mut session = GameSession::new(Difficulty::Hard, 50);
        assert_eq!(session.guess(1), Comparison::Lower);
        assert_eq!(session.guess(99), Comparison::Higher);
        assert_eq!(session.guess(2), Comparison::Lower);
        assert_eq!(session.chances_remaining(), 0);
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_match_does_not_spend_a_chance() {
        let mut session = GameSession::new(Difficulty::Hard, 50);
        session.guess(10);
        session.guess(90);
        assert_eq!(session.guess(50), Comparison::Equal);
        assert_eq!(session.chances_remaining(), 1);
        assert_eq!(session.attempts_used(), 3);

        let record = session.finish(SystemTime::now());
        assert_eq!(record.attempts, 3);
        assert!(record.time_taken >= 0.0);
    }

    #[test]
    fn test_first_guess_win_is_one_attempt() {
        let mut session = GameSession::new(Difficulty::Easy, 7);
        assert_eq!(session.guess(7), Comparison::Equal);
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn test_no_hint_before_a_wrong_guess() {
        let mut session = GameSession::new(Difficulty::Easy, 50);
        assert!(!session.can_offer_hint());
        assert_eq!(session.take_hint(), None);
        assert!(!session.hint_used());
    }

    #[test]
    fn test_hint_is_given_once() {
        let mut session = GameSession::new(Difficulty::Easy, 50);
        session.guess(1);
        assert!(session.can_offer_hint());
        assert_eq!(
            session.take_hint().as_deref(),
            Some("The distance between the target and your guess is more than 20!")
        );

        session.guess(45);
        assert!(!session.can_offer_hint());
        assert_eq!(session.take_hint(), None);
    }

    #[test]
    fn test_hint_measures_from_latest_guess() {
        let mut session = GameSession::new(Difficulty::Easy, 50);
        session.guess(1);
        session.guess(45);
        assert_eq!(
            session.take_hint().as_deref(),
            Some("The distance between the target and your guess is 10 or less!")
        );
    }
}

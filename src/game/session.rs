use std::io::{self, BufRead, Write};
use std::time::SystemTime;

use log::{debug, info, warn};

use super::prompt::Console;
use super::score_store::{SaveOutcome, ScoreStore};
use super::target::TargetSource;
use crate::model::{Comparison, Difficulty, GameSession, RoundOutcome, TARGET_RANGE};

#[derive(Debug)]
pub enum SessionState {
    ChoosingDifficulty,
    AwaitingGuess(GameSession),
    Won(GameSession),
    OutOfChances(GameSession),
    ReplayPrompt,
    Terminated,
}

/// Drives rounds until the player declines to play again or input ends.
pub struct Session<'a, R: BufRead, W: Write, T: TargetSource> {
    console: Console<R, W>,
    target_source: T,
    score_store: &'a ScoreStore,
    debug_mode: bool,
    outcomes: Vec<RoundOutcome>,
}

impl<'a, R: BufRead, W: Write, T: TargetSource> Session<'a, R, W, T> {
    pub fn new(console: Console<R, W>, target_source: T, score_store: &'a ScoreStore) -> Self {
        Self {
            console,
            target_source,
            score_store,
            debug_mode: false,
            outcomes: Vec::new(),
        }
    }

    /// Prints the target at the start of every round.
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn run(mut self) -> io::Result<Vec<RoundOutcome>> {
        self.welcome()?;

        let mut state = SessionState::ChoosingDifficulty;
        while !matches!(state, SessionState::Terminated) {
            state = match self.step(state) {
                Ok(next) => next,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    info!(target: "session", "Input closed, ending session");
                    SessionState::Terminated
                }
                Err(err) => return Err(err),
            };
        }

        self.console.say("Thank you for playing! Goodbye!")?;
        Ok(self.outcomes)
    }

    pub fn step(&mut self, state: SessionState) -> io::Result<SessionState> {
        match state {
            SessionState::ChoosingDifficulty => self.choose_difficulty(),
            SessionState::AwaitingGuess(game) => self.await_guess(game),
            SessionState::Won(game) => self.won(game),
            SessionState::OutOfChances(game) => self.out_of_chances(game),
            SessionState::ReplayPrompt => self.replay_prompt(),
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    fn welcome(&mut self) -> io::Result<()> {
        self.console.say("Welcome to the Number Guessing Game!")?;
        self.console.say("I'm thinking of a number between 1 and 100.")?;
        self.console
            .say("You have a finite amount of chances to guess the correct number.")?;
        self.console.say("It is based on the difficulty you choose.")
    }

    fn choose_difficulty(&mut self) -> io::Result<SessionState> {
        self.console.blank_line()?;
        self.console.say("Please select the difficulty level:")?;
        for difficulty in Difficulty::all() {
            self.console.say(&difficulty.menu_line())?;
        }

        if let Some(best) = self.score_store.load() {
            self.console.blank_line()?;
            self.console.say(&format!(
                "Your best score so far: {} seconds with {} attempts.",
                best.time_display(),
                best.attempts
            ))?;
        }

        let difficulty = self.console.ask_difficulty()?;
        self.console.blank_line()?;
        self.console.say(&format!(
            "Great! You have selected {} difficulty level.",
            difficulty
        ))?;
        self.console.say(&format!(
            "You have {} chances to guess the number.",
            difficulty.chances()
        ))?;
        self.console.say("Good luck!")?;
        self.console.blank_line()?;

        let target = self.target_source.generate(TARGET_RANGE);
        let game = GameSession::new(difficulty, target);
        info!(
            target: "session",
            "round {} started: {} with {} chances",
            game.round_id,
            difficulty,
            game.chances_remaining()
        );
        if self.debug_mode {
            self.console
                .say(&format!("(Debug) The target number is: {}", target))?;
        }

        Ok(SessionState::AwaitingGuess(game))
    }

    fn await_guess(&mut self, mut game: GameSession) -> io::Result<SessionState> {
        if game.can_offer_hint() && self.console.ask_yes_no("Do you want a hint?")?.is_yes() {
            if let Some(hint) = game.take_hint() {
                debug!(target: "session", "round {}: hint given", game.round_id);
                self.console.say(&hint)?;
            }
        }

        let guess = self.console.ask_guess()?;
        let comparison = game.guess(guess);
        if let Some(feedback) = comparison.feedback() {
            self.console.say(feedback)?;
        }

        Ok(match comparison {
            Comparison::Equal => SessionState::Won(game),
            _ if game.is_exhausted() => SessionState::OutOfChances(game),
            _ => SessionState::AwaitingGuess(game),
        })
    }

    fn won(&mut self, mut game: GameSession) -> io::Result<SessionState> {
        let record = game.finish(SystemTime::now());
        info!(
            target: "session",
            "round {} won: {:?}",
            game.round_id,
            record
        );

        match self.score_store.save(&record) {
            Ok(SaveOutcome::Saved) => self.console.say("New best score! Saving your score...")?,
            Ok(SaveOutcome::Rejected) => self
                .console
                .say("You did not beat your best score. Not saving.")?,
            Err(err) => {
                warn!(
                    target: "session",
                    "Could not save score to {}: {}",
                    self.score_store.path().display(),
                    err
                );
                self.console
                    .say(&format!("Warning: could not save your score ({}).", err))?;
            }
        }

        self.console
            .say("Congratulations! You've guessed the correct number!")?;
        self.console.say(&format!(
            "You took {} seconds to guess the number.",
            record.time_display()
        ))?;

        self.outcomes.push(RoundOutcome::Won {
            difficulty: game.difficulty,
            record,
            chances_remaining: game.chances_remaining(),
        });
        Ok(SessionState::ReplayPrompt)
    }

    fn out_of_chances(&mut self, game: GameSession) -> io::Result<SessionState> {
        info!(
            target: "session",
            "round {} lost, target was {}",
            game.round_id,
            game.target()
        );
        self.console
            .say("Sorry, you've run out of chances. Game over!")?;

        self.outcomes.push(RoundOutcome::OutOfChances {
            difficulty: game.difficulty,
            target: game.target(),
        });
        Ok(SessionState::ReplayPrompt)
    }

    fn replay_prompt(&mut self) -> io::Result<SessionState> {
        if self.console.ask_yes_no("Do you want to play again?")?.is_yes() {
            Ok(SessionState::ChoosingDifficulty)
        } else {
            Ok(SessionState::Terminated)
        }
    }
}

mod comparison;
mod difficulty;
mod game_session;
mod hint_band;
mod round_outcome;
mod score_record;
mod timer_state;
mod yes_no;

pub use comparison::{compare, Comparison};
pub use difficulty::Difficulty;
pub use game_session::{GameSession, TARGET_RANGE};
pub use hint_band::{hint, HintBand};
pub use round_outcome::RoundOutcome;
pub use score_record::ScoreRecord;
pub use timer_state::TimerState;
pub use yes_no::YesNo;

use super::{Difficulty, ScoreRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Won {
        difficulty: Difficulty,
        record: ScoreRecord,
        chances_remaining: u32,
    },
    OutOfChances {
        difficulty: Difficulty,
        target: u32,
    },
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }
}

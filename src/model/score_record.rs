use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A finished round as it is persisted: `{"timeTaken": 12.34, "attempts": 3}`.
///
/// `time_taken` is always whole centiseconds, so the value shown to the
/// player, the value written to disk and the value compared are the same.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub time_taken: f64,
    pub attempts: u32,
}

impl ScoreRecord {
    pub fn new(time_taken: f64, attempts: u32) -> Self {
        Self {
            time_taken,
            attempts,
        }
    }

    pub fn from_elapsed(elapsed: Duration, attempts: u32) -> Self {
        let centis = (elapsed.as_millis() + 5) / 10;
        Self::new(centis as f64 / 100.0, attempts)
    }

    /// Lower time wins; on equal time, fewer attempts wins.
    pub fn beats(&self, other: &ScoreRecord) -> bool {
        self.time_taken < other.time_taken
            || (self.time_taken == other.time_taken && self.attempts < other.attempts)
    }

    pub fn time_display(&self) -> String {
        format!("{:.2}", self.time_taken)
    }
}

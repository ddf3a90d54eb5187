use std::time::{Duration, SystemTime};

#[derive(Clone, Debug)]
pub struct TimerState {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            started_timestamp: SystemTime::now(),
            ended_timestamp: None,
        }
    }
}

impl TimerState {
    pub fn elapsed(&self) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(SystemTime::now());

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}

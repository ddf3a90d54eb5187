mod prompt;
pub mod score_store;
pub mod session;
pub mod settings;
pub mod target;

pub use prompt::{parse_guess, Console};
pub use score_store::{SaveOutcome, ScoreStore, ScoreStoreError};
pub use session::{Session, SessionState};
pub use settings::Settings;
pub use target::{generate, FixedTarget, RandomTarget, TargetSource};

use log::warn;
use std::path::PathBuf;

pub const SCORE_FILE_VAR: &str = "NUMGUESS_SCORE_FILE";
const DEFAULT_SCORE_FILE: &str = "score.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub score_path: PathBuf,
    pub seed: Option<u64>,
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            score_path: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,
            debug_mode: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            score_path: Self::score_path_from_env(),
            seed: Self::seed_from_env(),
            debug_mode: Self::is_debug_mode(),
        }
    }

    fn score_path_from_env() -> PathBuf {
        std::env::var_os(SCORE_FILE_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE))
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("SEED").ok()?;
        match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!("Ignoring SEED={:?}: {}", value, err);
                None
            }
        }
    }
}

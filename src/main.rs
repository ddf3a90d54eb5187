use std::io;

use log::{error, info};
use numguess::game::{Console, RandomTarget, ScoreStore, Session, Settings};

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let settings = Settings::from_env();
    info!("Starting with {:?}", settings);

    let score_store = ScoreStore::new(settings.score_path.clone());
    let target_source = RandomTarget::new(settings.seed);
    let console = Console::new(io::stdin().lock(), io::stdout());

    let result = Session::new(console, target_source, &score_store)
        .with_debug_mode(settings.debug_mode)
        .run();
    if let Err(err) = result {
        error!("Session ended on a terminal error: {}", err);
    }
}

//! Headless runner: `apple-catcher-sim [--seed N] [--frames N] [--pretty]`.
//!
//! Plays one session with the autopilot and prints the final state as JSON.
//! Game tuning comes from the same environment variables as the terminal game.

use anyhow::Result;

use apple_catcher::config::AppConfig;
use apple_catcher::logging::{init_logging, LogTarget, LoggingConfig};
use apple_catcher::sim::{parse_sim_args, run_sim, DEFAULT_SEED};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sim_args = parse_sim_args(&args)?;
    let config = AppConfig::from_env()?;

    init_logging(LoggingConfig {
        env_filter: None,
        target: config
            .log_path
            .clone()
            .map_or(LogTarget::Stderr, LogTarget::File),
    })?;

    let seed = sim_args.seed.or(config.seed).unwrap_or(DEFAULT_SEED);
    let report = run_sim(seed, sim_args.frames, config.game);

    let json = if sim_args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::set_time::SetTimeLogic;
use crate::errors::AppResult;
use crate::models::TimeField;
use crate::utils::clock::SystemClock;

/// Set today's start time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { time, force } = cmd {
        SetTimeLogic::apply(cfg, &SystemClock, TimeField::Start, time.clone(), *force)?;

        println!();
        println!("Okay, let's get started!");
    }

    Ok(())
}

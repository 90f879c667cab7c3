use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::set_time::SetTimeLogic;
use crate::errors::AppResult;
use crate::models::TimeField;
use crate::utils::clock::SystemClock;

/// Set today's end time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::End { time, force } = cmd {
        SetTimeLogic::apply(cfg, &SystemClock, TimeField::End, time.clone(), *force)?;

        println!();
        println!("That's all for today. Have a nice evening!");
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breaks::BreakLogic;
use crate::errors::AppResult;
use crate::utils::clock::SystemClock;

/// Record a break in today's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break {
        start,
        end,
        comment,
    } = cmd
    {
        BreakLogic::apply(
            cfg,
            &SystemClock,
            start.clone(),
            end.clone(),
            comment.clone(),
        )?;
    }

    Ok(())
}

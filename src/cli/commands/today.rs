use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use crate::utils::clock::SystemClock;

/// Show today's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Today) {
        let store = Store::load(&cfg.file)?;
        view::show_today(&store, &SystemClock)?;
    }

    Ok(())
}

use chrono::Datelike;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::month::month_summary;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use crate::utils::clock::{Clock, SystemClock};

/// Show a month statistic.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, year } = cmd {
        let today = SystemClock.today();
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        let store = Store::load(&cfg.file)?;
        let data = month_summary(&store, month, year)?;

        view::show_month(&data, month, year);
    }

    Ok(())
}

use chrono::Datelike;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::week::week_summary;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::date::iso_week_number;

/// Show a calendar-week summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { week, year } = cmd {
        let today = SystemClock.today();
        let week = week.unwrap_or_else(|| iso_week_number(today));
        let year = year.unwrap_or_else(|| today.year());

        let store = Store::load(&cfg.file)?;
        let data = week_summary(&store, week, year)?;

        view::show_week(&data, week);
    }

    Ok(())
}

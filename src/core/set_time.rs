use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimeField;
use crate::store::Store;
use crate::ui::{messages, view};
use crate::utils::clock::Clock;

pub struct SetTimeLogic;

impl SetTimeLogic {
    /// Set today's start or end time and persist the store.
    ///
    /// Fails with `AlreadySet` (nothing written) when the field holds a
    /// value and `force` is off; with `force` the overwrite is announced.
    /// Ends by printing the updated day view.
    pub fn apply(
        cfg: &Config,
        clock: &dyn Clock,
        field: TimeField,
        time: Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let mut store = Store::load(&cfg.file)?;

        let key = clock.today().format("%Y-%m-%d").to_string();
        let mut day = store.find_date(&key);

        if let Some(previous) = day.set_time(field, time, force, clock)? {
            messages::warning(format!(
                "Overwriting previous {} time (was {}).",
                field.name(),
                previous
            ));
        }

        store.replace(&key, day);
        store.save(&cfg.file)?;

        view::show_today(&store, clock)
    }
}

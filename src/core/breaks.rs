use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use crate::utils::clock::Clock;

pub struct BreakLogic;

impl BreakLogic {
    /// Append a break to today's record and persist the store.
    ///
    /// A missing end time is stamped with the current wall clock. Breaks
    /// are never validated against each other.
    pub fn apply(
        cfg: &Config,
        clock: &dyn Clock,
        start: String,
        end: Option<String>,
        comment: Option<String>,
    ) -> AppResult<()> {
        let mut store = Store::load(&cfg.file)?;

        let key = clock.today().format("%Y-%m-%d").to_string();
        let mut day = store.find_date(&key);

        day.add_break(start, end, comment, clock);

        store.replace(&key, day);
        store.save(&cfg.file)?;

        view::show_today(&store, clock)
    }
}

use clap::{Parser, Subcommand};

/// Command-line interface definition for arbeit
/// CLI application to log working hours in a JSON file
#[derive(Parser)]
#[command(
    name = "arbeit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log your working hours in a JSON file",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom file)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set today's start time
    Start {
        /// Start time (HH:MM)
        #[arg(long = "time", help = "Start time (HH:MM), defaults to now")]
        time: Option<String>,

        /// Overwrite a previously set start time
        #[arg(long = "force", help = "Overwrite a previously set start time")]
        force: bool,
    },

    /// Set today's end time
    End {
        /// End time (HH:MM)
        #[arg(long = "time", help = "End time (HH:MM), defaults to now")]
        time: Option<String>,

        /// Overwrite a previously set end time
        #[arg(long = "force", help = "Overwrite a previously set end time")]
        force: bool,
    },

    /// Record a break in today's record
    Break {
        /// Break start time (HH:MM)
        start: String,

        #[arg(long = "end", help = "Break end time (HH:MM), defaults to now")]
        end: Option<String>,

        #[arg(long = "comment", help = "Free-text note for the break")]
        comment: Option<String>,
    },

    /// Show today's record
    Today,

    /// Show a calendar-week summary
    Week {
        #[arg(long = "week", help = "ISO week number, defaults to the current week")]
        week: Option<u32>,

        #[arg(long = "year", help = "Year, defaults to the current year")]
        year: Option<i32>,
    },

    /// Show a month statistic
    Month {
        #[arg(
            long = "month",
            value_parser = clap::value_parser!(u32).range(1..=12),
            help = "Month (1-12), defaults to the current month"
        )]
        month: Option<u32>,

        #[arg(long = "year", help = "Year, defaults to the current year")]
        year: Option<i32>,
    },
}

pub mod clock;
pub mod colors;
pub mod date;
pub mod time;

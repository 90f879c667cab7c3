pub mod breaks;
pub mod end;
pub mod month;
pub mod start;
pub mod today;
pub mod week;

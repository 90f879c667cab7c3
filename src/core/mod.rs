pub mod breaks;
pub mod calculator;
pub mod set_time;

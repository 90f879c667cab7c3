use std::fmt;

use crate::utils::colors::{RED, YELLOW, paint};

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(YELLOW, &msg.to_string()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(RED, &msg.to_string()));
}

//! Command implementations

pub mod check;
pub mod console;

pub use check::{check_pair, print_check};
pub use console::{Console, run_console};

//! Terminal output
//!
//! The engine only produces statuses; colors and pacing live here.

pub mod display;
pub mod formatters;

pub use display::{DEFAULT_DELAY, Printer};
pub use formatters::{Palette, share_grid};

//! Utilities

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};

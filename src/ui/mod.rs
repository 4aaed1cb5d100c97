//! Terminal UI helpers

mod spinner;

pub use spinner::{clear_spinner, create_spinner};

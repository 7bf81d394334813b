//! CLI command handlers, one per file.

mod clean;
mod export;

pub use clean::run_clean;
pub use export::run_export;

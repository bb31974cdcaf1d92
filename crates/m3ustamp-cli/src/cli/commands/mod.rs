//! CLI command handlers, one file per command.

mod completions;
mod run;
mod stamp;

pub use completions::run_completions;
pub use run::run_sources;
pub use stamp::run_stamp;

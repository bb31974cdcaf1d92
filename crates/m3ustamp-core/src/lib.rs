pub mod config;
pub mod logging;

pub mod fetch;
pub mod name;
pub mod process;
pub mod rewrite;
pub mod save;

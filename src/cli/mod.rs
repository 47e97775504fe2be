pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Commands, SourceArgs};
pub use commands::run;

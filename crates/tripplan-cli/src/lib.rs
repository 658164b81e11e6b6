mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, TripFieldArgs};
pub use commands::run;

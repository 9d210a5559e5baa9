//! ac-cli library
//!
//! Command definitions and execution for the `ac` binary, exported for tests.

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod user_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use dispatch::{Profile, execute};
pub use error::{CliError, Result as CliResult};
pub use user_commands::UserCommands;

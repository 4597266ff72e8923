//! Launch module for the yarn-start buildpack.
//!
//! Turns the start scripts of a project into the launch processes of the
//! image: the assembled start command and, under live reload, a watchexec
//! wrapper around it.

mod command;
mod process;
mod reload;

pub use command::{assemble_start_command, StartCommand, DEFAULT_SERVER_ENTRY};
pub use process::{LaunchProcess, ProcessKind};
pub use reload::{decorate, reloadable, LaunchPlan, WATCHEXEC};

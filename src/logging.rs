//! Build output.
//!
//! Output goes through `tracing` with a plain fmt layer on stdout: no
//! timestamps, targets or level prefixes, so lines read like the rest of a
//! buildpack build log. Verbosity comes from `BP_LOG_LEVEL`.
//!
//! ```text
//! Yarn Start Buildpack 1.0.0
//!   Assigning launch processes:
//!     web (default): bash -c node server.js
//!
//! ```

use std::sync::Once;

use tracing::{info, Level};
use tracing_subscriber::fmt;

use crate::launch::LaunchProcess;

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Install the global subscriber at the given level.
///
/// Later calls are ignored.
pub fn init_logging(level: Level) {
    INIT.call_once(|| {
        let subscriber = fmt()
            .with_max_level(level)
            .with_writer(std::io::stdout)
            .without_time()
            .with_target(false)
            .with_level(false)
            .with_ansi(false)
            .finish();

        // Another subscriber may already be installed (e.g. in tests).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Log the buildpack title line.
pub fn title(name: &str, version: &str) {
    info!("{name} {version}");
}

/// Log the launch processes assigned to the image.
pub fn launch_processes<'a>(processes: impl IntoIterator<Item = &'a LaunchProcess>) {
    for line in format_launch_processes(processes).lines() {
        info!("{line}");
    }
    info!("");
}

/// Render the process listing.
///
/// Labels are padded to the widest one so that commands line up.
pub fn format_launch_processes<'a>(
    processes: impl IntoIterator<Item = &'a LaunchProcess>,
) -> String {
    let labelled: Vec<(String, String)> = processes
        .into_iter()
        .map(|process| {
            let label = if process.default {
                format!("{} (default):", process.kind)
            } else {
                format!("{}:", process.kind)
            };
            (label, process.command_line())
        })
        .collect();

    let width = labelled
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("  Assigning launch processes:\n");
    for (label, command) in labelled {
        out.push_str(&format!("    {label:width$} {command}\n"));
    }
    out
}

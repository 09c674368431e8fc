//! Command-line front end.

mod context;
mod flags;
mod prompts;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;
pub use prompts::Console;

use crate::settings::{self, Settings};

/// Parse `args`, generate, and report. Validation failures print an error and exit 1.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let flags = CliFlags::parse_from(args);

    let console = Console::new(flags.quiet);

    let settings_path = settings::default_path();
    let saved = Settings::load_from(&settings_path).unwrap_or_else(|e| {
        log::warn!("failed to load {}: {e}", settings_path.display());
        console.warn(&format!(
            "Warning: could not read {}, using defaults",
            settings_path.display()
        ));
        Settings::default()
    });

    let mut ctx = Context::new(flags, saved, settings_path);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ctx.console().error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

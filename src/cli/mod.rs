mod context;
mod flags;
pub mod prompts;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Parse arguments and run. Errors are reported on stderr.
pub fn run() -> ExitCode {
    let flags = CliFlags::parse();
    let mut context = Context::new(flags);

    match context.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

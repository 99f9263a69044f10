//! Command-line mode.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, ExitCode};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Parse `args`, run, and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try 'meetpass --help' for more information.");
            return ExitCode::Usage as i32;
        }
    };

    match ctx.run() {
        Ok(code) | Err(Done(code)) => code as i32,
    }
}

//! CLI context - bundles flags, clipboard state and the run sequence.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliFlags, help, prompts, quiet};
use crate::entropy;
use crate::error::Error;
use crate::pass::{self, DEFAULT_LENGTH, MeetingPassword, charset};
use crate::terminal::{box_bottom, box_line, box_top, calculate_entropy, entropy_strength};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    CheckFailed = 1,
    Usage = 2,
    Failure = 3,
}

/// Early exit - not necessarily an error, carries the exit code.
#[derive(Debug)]
pub struct Done(pub ExitCode);

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub length: usize,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        let length = flags.length.unwrap_or(DEFAULT_LENGTH);

        Ok(Self {
            flags,
            length,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits.
    pub fn run(&mut self) -> Result<ExitCode, Done> {
        quiet::set(self.flags.quiet);
        init_logging(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_check()?;
        self.handle_urandom();
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done(ExitCode::Success));
        }
        if self.flags.version {
            println!("meetpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(ExitCode::Success));
        }
        Ok(())
    }

    fn handle_check(&mut self) -> Result<(), Done> {
        let Some(mut password) = self.flags.check.take() else {
            return Ok(());
        };

        let valid = pass::is_valid(&password);
        password.zeroize();

        if valid {
            println!("valid");
            Err(Done(ExitCode::Success))
        } else {
            println!("invalid");
            Err(Done(ExitCode::CheckFailed))
        }
    }

    fn handle_urandom(&self) {
        if self.flags.urandom && !entropy::enable_urandom() {
            prompts::urandom_unavailable();
        }
    }

    fn open_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }

        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                debug!("clipboard unavailable: {e}");
                if prompts::clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(Done(ExitCode::Success))
                }
            }
        }
    }

    /// Generate the meeting password and handle output.
    pub fn generate_output(&mut self) -> Result<ExitCode, Done> {
        let records = pass::meeting_password(self.length).map_err(|e| {
            prompts::error(&e.to_string());
            match e {
                Error::InvalidArgument(_) => Done(ExitCode::Usage),
                Error::InvariantViolation(_) => Done(ExitCode::Failure),
            }
        })?;
        let record = &records[0];

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(record.password().to_string()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    return Err(Done(ExitCode::Failure));
                }
            }
        } else if self.flags.plain {
            println!("{}", record.password());
        } else {
            let mut json = pass::to_json(&records).map_err(|e| {
                prompts::error(&format!("Failed to encode meeting password record: {e}"));
                Done(ExitCode::Failure)
            })?;
            println!("{json}");
            json.zeroize();
        }

        if self.flags.info && !quiet::enabled() {
            print_info(record);
        }

        Ok(ExitCode::Success)
    }
}

fn print_info(record: &MeetingPassword) {
    let length = record.password().chars().count();
    let bits = calculate_entropy(length, charset::size());

    println!();
    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_line(&format!(
        "Source: {} • Charset: {} chars • Length: {}",
        entropy::source_name(),
        charset::size(),
        length
    ));
    box_line(&format!(
        "Self-check: {}",
        if record.valid_password() { "passed" } else { "FAILED" }
    ));
    box_bottom();
}

fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

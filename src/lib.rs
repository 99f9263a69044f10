//! One-off meeting passwords: 8-10 characters with at least one digit,
//! one lowercase and one uppercase letter.
//!
//! ```no_run
//! let out = meetpass::meeting_password(10)?;
//! assert!(out[0].valid_password());
//! # Ok::<(), meetpass::Error>(())
//! ```

pub mod cli;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod pass;
pub mod terminal;

pub use error::{Error, Result};
pub use pass::{MeetingPassword, generate, is_valid, meeting_password};

//! Password generation, validation and output records.

pub mod charset;
mod generate;
pub mod policy;
pub mod pool;
mod record;

pub use generate::{Draft, MIN_LENGTH, generate, generate_with};
pub use policy::{DEFAULT_LENGTH, is_valid};
pub use record::{MeetingPassword, meeting_password, meeting_password_with, to_json};

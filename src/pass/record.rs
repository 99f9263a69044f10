//! Output record handed to the webhook step.

use log::info;
use rand::Rng;
use serde::Serialize;
use zeroize::Zeroize;

use super::generate::generate_with;
use super::policy::{POLICY_LENGTHS, is_valid};
use crate::entropy::HardwareRng;
use crate::error::{Error, Result};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MeetingPassword {
    password: String,
    #[serde(rename = "validPassword")]
    valid_password: bool,
}

impl MeetingPassword {
    /// Wrap a password together with its self-check result.
    pub fn new(password: String) -> Self {
        let valid_password = is_valid(&password);
        MeetingPassword {
            password,
            valid_password,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn valid_password(&self) -> bool {
        self.valid_password
    }
}

impl Drop for MeetingPassword {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Single-element output sequence for a password of `length` characters.
pub fn meeting_password(length: usize) -> Result<Vec<MeetingPassword>> {
    meeting_password_with(length, &mut HardwareRng)
}

pub fn meeting_password_with<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<Vec<MeetingPassword>> {
    if !POLICY_LENGTHS.contains(&length) {
        return Err(Error::InvalidArgument(format!(
            "meeting password length must be {}..={}, got {length}",
            POLICY_LENGTHS.start(),
            POLICY_LENGTHS.end()
        )));
    }

    let record = checked(MeetingPassword::new(generate_with(length, rng)?))?;

    info!("generated {length}-character meeting password");
    Ok(vec![record])
}

/// Pass a record through only if its self-check held.
fn checked(record: MeetingPassword) -> Result<MeetingPassword> {
    if !record.valid_password {
        return Err(Error::InvariantViolation(format!(
            "generated {}-character password failed the composition check",
            record.password.chars().count()
        )));
    }
    Ok(record)
}

/// Serialize the output sequence as a JSON array.
pub fn to_json(records: &[MeetingPassword]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

//! Composition policy for meeting passwords.

use std::ops::RangeInclusive;

use super::charset::CharClass;

pub const MIN_POLICY_LENGTH: usize = 8;
pub const MAX_POLICY_LENGTH: usize = 10;
pub const DEFAULT_LENGTH: usize = 10;

pub const POLICY_LENGTHS: RangeInclusive<usize> = MIN_POLICY_LENGTH..=MAX_POLICY_LENGTH;

/// True iff the password has a digit, a lowercase and an uppercase letter,
/// and 8 to 10 characters.
pub fn is_valid(password: &str) -> bool {
    let bytes = password.as_bytes();
    POLICY_LENGTHS.contains(&password.chars().count())
        && CharClass::REQUIRED
            .iter()
            .all(|class| class.present_in(bytes))
}

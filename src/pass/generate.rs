//! Password generation.

use log::{debug, trace};
use rand::Rng;
use zeroize::Zeroize;

use super::charset::{self, CharClass};
use super::pool::PositionPool;
use crate::entropy::HardwareRng;
use crate::error::{Error, Result};

/// One pool slot per required class.
pub const MIN_LENGTH: usize = CharClass::REQUIRED.len();

/// Upper bound accepted by the generator; the meeting policy itself stops at 10.
pub const MAX_LENGTH: usize = 1024;

/// Generate a password of `length` characters from the process entropy source.
pub fn generate(length: usize) -> Result<String> {
    generate_with(length, &mut HardwareRng)
}

/// Generate a password drawing every random choice from `rng`.
pub fn generate_with<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String> {
    let mut draft = Draft::draw(length, rng)?;
    for class in CharClass::REQUIRED {
        draft.ensure(class, rng);
    }
    Ok(draft.finish())
}

/// A candidate password and the positions not yet claimed by a forced substitution.
pub struct Draft {
    chars: Vec<u8>,
    pool: PositionPool,
}

impl Draft {
    /// Initial draw: `length` characters, each uniform over the combined alphabet.
    pub fn draw<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::InvalidArgument(format!(
                "password length must be {MIN_LENGTH}..={MAX_LENGTH}, got {length}"
            )));
        }

        let chars = (0..length)
            .map(|_| random_byte(charset::COMBINED, rng))
            .collect();

        Ok(Draft {
            chars,
            pool: PositionPool::new(length),
        })
    }

    /// Force `class` into the password if the draw missed it.
    /// Returns the overwritten position, or `None` when the class was already present.
    ///
    /// A position holding the only character of another present class is never
    /// chosen, so no pass can undo a class an earlier check saw.
    pub fn ensure<R: Rng + ?Sized>(&mut self, class: CharClass, rng: &mut R) -> Option<usize> {
        if class.present_in(&self.chars) {
            return None;
        }

        let c = random_byte(class.alphabet(), rng);
        let protected = self.sole_holders();
        // At most one protected slot per unforced present class keeps this non-empty
        // for length >= MIN_LENGTH.
        let pos = self.pool.take_where(rng, |pos| !protected.contains(&pos))?;
        self.chars[pos] = c;

        debug!("forced {class} substitution at position {pos}");
        trace!("{} position(s) left in pool", self.pool.len());
        Some(pos)
    }

    /// Positions that are the single occurrence of their class.
    fn sole_holders(&self) -> Vec<usize> {
        CharClass::REQUIRED
            .iter()
            .filter_map(|class| {
                let mut hits = self
                    .chars
                    .iter()
                    .enumerate()
                    .filter(|&(_, &c)| class.contains(c));
                match (hits.next(), hits.next()) {
                    (Some((pos, _)), None) => Some(pos),
                    _ => None,
                }
            })
            .collect()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn pool(&self) -> &PositionPool {
        &self.pool
    }

    pub fn finish(mut self) -> String {
        let chars = std::mem::take(&mut self.chars);
        // Safety: every byte comes from an ASCII alphabet
        unsafe { String::from_utf8_unchecked(chars) }
    }
}

impl Drop for Draft {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::policy::is_valid;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_passwords_meet_policy() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for length in 8..=10 {
            for _ in 0..2_000 {
                let pass = generate_with(length, &mut rng).unwrap();
                assert_eq!(pass.len(), length);
                assert!(pass.bytes().all(|c| charset::COMBINED.contains(&c)));
                assert!(is_valid(&pass), "{pass}");
            }
        }
    }

    #[test]
    fn hardware_source_meets_policy() {
        for length in [8, 10] {
            let pass = generate(length).unwrap();
            assert!(is_valid(&pass));
        }
    }

    #[test]
    fn too_short_lengths_are_rejected() {
        let mut rng = StepRng::new(0, 0);
        for length in [0, 1, 2] {
            assert!(matches!(
                generate_with(length, &mut rng),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(matches!(generate(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(generate(2), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn oversized_lengths_are_rejected() {
        let mut rng = StepRng::new(0, 0);
        for length in [MAX_LENGTH + 1, usize::MAX] {
            assert!(matches!(
                generate_with(length, &mut rng),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(generate_with(MAX_LENGTH, &mut rng).unwrap().len(), MAX_LENGTH);
    }

    fn draft_of(chars: &[u8]) -> Draft {
        Draft {
            chars: chars.to_vec(),
            pool: PositionPool::new(chars.len()),
        }
    }

    #[test]
    fn lone_digit_survives_uppercase_pass() {
        for seed in 0..500 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut draft = draft_of(b"bial1qnxab");
            let pos = draft.ensure(CharClass::Uppercase, &mut rng).unwrap();
            assert_ne!(pos, 4);
            assert_eq!(draft.as_bytes()[4], b'1');
            assert!(is_valid(&draft.finish()));
        }
    }

    #[test]
    fn lone_classes_survive_at_minimum_length() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut draft = draft_of(b"71R");
            // Two digits: either may go, the single uppercase may not.
            let pos = draft.ensure(CharClass::Lowercase, &mut rng).unwrap();
            assert!(pos < 2);
            assert_eq!(draft.as_bytes()[2], b'R');
            for class in CharClass::REQUIRED {
                assert!(class.present_in(draft.as_bytes()));
            }
        }
    }

    #[test]
    fn zero_source_fixes_digit_and_lowercase() {
        let mut rng = StepRng::new(0, 0);
        let mut draft = Draft::draw(10, &mut rng).unwrap();
        assert_eq!(draft.as_bytes(), b"AAAAAAAAAA");

        assert_eq!(draft.ensure(CharClass::Digit, &mut rng), Some(0));
        assert_eq!(draft.ensure(CharClass::Lowercase, &mut rng), Some(1));
        assert_eq!(draft.ensure(CharClass::Uppercase, &mut rng), None);
        assert_eq!(draft.pool().len(), 8);

        let pass = draft.finish();
        assert_eq!(pass, "0aAAAAAAAA");

        let mut rng = StepRng::new(0, 0);
        assert_eq!(generate_with(10, &mut rng).unwrap(), "0aAAAAAAAA");
    }

    #[test]
    fn passes_never_share_a_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..5_000 {
            let mut draft = Draft::draw(MIN_LENGTH, &mut rng).unwrap();
            let mut forced: Vec<(usize, u8)> = Vec::new();
            for class in CharClass::REQUIRED {
                if let Some(pos) = draft.ensure(class, &mut rng) {
                    assert!(forced.iter().all(|&(p, _)| p != pos));
                    assert!(!draft.pool().contains(pos));
                    forced.push((pos, draft.as_bytes()[pos]));
                }
            }
            let bytes = draft.as_bytes();
            for &(pos, c) in &forced {
                assert_eq!(bytes[pos], c, "forced character overwritten in {:?}", bytes);
            }
            for class in CharClass::REQUIRED {
                assert!(class.present_in(bytes), "{class} undone in {:?}", bytes);
            }
        }
    }

    #[test]
    fn present_class_leaves_pool_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut draft = Draft::draw(10, &mut rng).unwrap();
        let class = CharClass::REQUIRED
            .into_iter()
            .find(|c| c.present_in(draft.as_bytes()))
            .unwrap();
        let before = draft.pool().clone();
        assert_eq!(draft.ensure(class, &mut rng), None);
        assert_eq!(draft.pool(), &before);
    }

    #[test]
    fn initial_draw_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(10_000);
        let trials = 10_000;
        let mut both_cases = 0;
        let mut digit = 0;

        for _ in 0..trials {
            let draft = Draft::draw(10, &mut rng).unwrap();
            let bytes = draft.as_bytes();
            if CharClass::Lowercase.present_in(bytes) && CharClass::Uppercase.present_in(bytes) {
                both_cases += 1;
            }
            if CharClass::Digit.present_in(bytes) {
                digit += 1;
            }
        }

        // Expected: both cases ~99.1%, digit ~82.8%.
        let both_cases = both_cases as f64 / trials as f64;
        let digit = digit as f64 / trials as f64;
        assert!(both_cases > 0.985, "both cases: {both_cases}");
        assert!((0.80..0.86).contains(&digit), "digit: {digit}");
    }
}

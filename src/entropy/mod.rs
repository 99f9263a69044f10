//! Process-wide random source: hardware cycle counter or /dev/urandom,
//! mixed through a prime-multiplier state and exposed as a `RngCore`.

mod primes;
pub mod urand;

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;
use rand_core::{Error, RngCore, impls};

use primes::PRIMES;

pub use urand::{disable as disable_urandom, enable as enable_urandom};

pub fn is_urandom_enabled() -> bool {
    urand::is_requested()
}

pub fn source_name() -> &'static str {
    if urand::is_requested() {
        "/dev/urandom"
    } else {
        HW_SOURCE
    }
}

// =============================================================================
// Entropy
// =============================================================================

#[cfg(target_arch = "x86_64")]
const HW_SOURCE: &str = "rdtsc";

#[cfg(target_arch = "aarch64")]
const HW_SOURCE: &str = "cycle counter";

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const HW_SOURCE: &str = "os rng";

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn hw_entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn hw_entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn hw_entropy() -> u64 {
    rand::rngs::OsRng.next_u64()
}

#[inline(always)]
fn entropy() -> u64 {
    if !urand::is_requested() {
        return hw_entropy();
    }
    match urand::rand() {
        Ok(v) => v,
        Err(e) => fall_back_to_hardware(e),
    }
}

/// Urandom pool failed mid-run: drop it and keep mixing real entropy.
#[cold]
fn fall_back_to_hardware(err: std::io::Error) -> u64 {
    warn!("urandom pool failed ({err}), using {HW_SOURCE} instead");
    urand::disable();
    hw_entropy()
}

// =============================================================================
// RNG
// =============================================================================

static STATE: LazyLock<AtomicU64> = LazyLock::new(|| AtomicU64::new(entropy()));

/// Next 64-bit output of the shared mixer.
#[inline]
pub fn next() -> u64 {
    let state = STATE.load(Ordering::Relaxed);
    let ent = entropy();

    // Mix entropy into prime selection
    let mixed = state ^ ent;
    let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

    // State transition: rotate, multiply by prime, XOR entropy
    let new_state = state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;
    STATE.store(new_state, Ordering::Relaxed);

    // SplitMix64 output finalizer
    let mut z = new_state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

pub fn zeroize_state() {
    STATE.store(0, Ordering::SeqCst);
}

/// Handle to the shared mixer, usable anywhere a `rand::Rng` is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareRng;

impl RngCore for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        (next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

//! Urandom pool - optional /dev/urandom entropy source via a small locked buffer.

use std::fs::File;
use std::io::{self, Read};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use zeroize::Zeroize;

use crate::cli::prompts;

const POOL_SIZE: usize = 4096;

static POOL: Mutex<Pool> = Mutex::new(Pool {
    bytes: [0; POOL_SIZE],
    pos: POOL_SIZE,
    locked: false,
});
static ACTIVE: AtomicBool = AtomicBool::new(false);
static DECLINED: AtomicBool = AtomicBool::new(false);

struct Pool {
    bytes: [u8; POOL_SIZE],
    pos: usize,
    locked: bool,
}

impl Pool {
    fn refill(&mut self) -> io::Result<()> {
        File::open("/dev/urandom")?.read_exact(&mut self.bytes)?;
        self.pos = 0;
        Ok(())
    }

    fn next_u64(&mut self) -> io::Result<u64> {
        if self.pos + 8 > POOL_SIZE {
            self.refill()?;
            debug!("urandom pool refilled");
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.bytes[self.pos..self.pos + 8]);
        // Consumed bytes are never served twice.
        self.bytes[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        Ok(u64::from_le_bytes(word))
    }
}

// =============================================================================
// Public API
// =============================================================================

pub fn is_available() -> bool {
    std::path::Path::new("/dev/urandom").exists()
}

pub fn is_requested() -> bool {
    ACTIVE.load(Ordering::Relaxed)
}

/// Enable urandom pool mode.
/// Returns false if unavailable or user declined.
pub fn enable() -> bool {
    is_available() && init()
}

pub fn disable() {
    shutdown()
}

/// Returns a random u64 from the pool.
#[inline]
pub fn rand() -> io::Result<u64> {
    POOL.lock()
        .map_err(|_| io::Error::other("urandom pool lock poisoned"))?
        .next_u64()
}

/// Emergency zero for signal handlers. Skips if the pool is busy.
pub fn emergency_zero() {
    if let Ok(mut pool) = POOL.try_lock() {
        pool.bytes.zeroize();
    }
}

// =============================================================================
// Pool management
// =============================================================================

#[cold]
#[inline(never)]
fn init() -> bool {
    if ACTIVE.load(Ordering::Acquire) {
        return true;
    }
    if DECLINED.load(Ordering::Acquire) {
        return false;
    }

    let Ok(mut pool) = POOL.lock() else {
        return false;
    };

    let ptr = pool.bytes.as_ptr() as *const libc::c_void;
    pool.locked = unsafe { libc::mlock(ptr, POOL_SIZE) == 0 };

    if !pool.locked {
        prompts::mlock_failed();

        if !prompts::mlock_continue_prompt() {
            DECLINED.store(true, Ordering::Release);
            return false;
        }
    }

    if let Err(e) = pool.refill() {
        warn!("failed to read /dev/urandom: {e}");
        return false;
    }

    ACTIVE.store(true, Ordering::Release);
    debug!("urandom pool active ({POOL_SIZE} bytes, locked: {})", pool.locked);
    true
}

/// Runs from atexit, possibly inside a signal handler: never blocks on the pool.
fn shutdown() {
    if !ACTIVE.swap(false, Ordering::AcqRel) {
        return;
    }

    if !wipe(&POOL) {
        debug!("urandom pool busy at shutdown, left for process teardown");
    }
}

/// Zero and unlock the pool if nobody holds it. Returns false when busy.
fn wipe(pool: &Mutex<Pool>) -> bool {
    let Ok(mut pool) = pool.try_lock() else {
        return false;
    };

    pool.bytes.zeroize();
    pool.pos = POOL_SIZE;
    if pool.locked {
        unsafe { libc::munlock(pool.bytes.as_ptr() as *const libc::c_void, POOL_SIZE) };
        pool.locked = false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_serves_distinct_words_across_refill() {
        if !is_available() {
            return;
        }
        let mut pool = Pool {
            bytes: [0; POOL_SIZE],
            pos: POOL_SIZE,
            locked: false,
        };
        let words: Vec<u64> = (0..(POOL_SIZE / 8 + 4))
            .map(|_| pool.next_u64().unwrap())
            .collect();
        assert_eq!(pool.pos, 32);
        assert!(words.iter().any(|&w| w != 0));
        assert!(pool.bytes[..32].iter().all(|&b| b == 0));
    }

    #[test]
    fn wipe_does_not_block_on_a_held_pool() {
        let pool = Mutex::new(Pool {
            bytes: [0xAA; POOL_SIZE],
            pos: 0,
            locked: false,
        });

        let guard = pool.lock().unwrap();
        assert!(!wipe(&pool));
        drop(guard);

        assert!(wipe(&pool));
        let pool = pool.lock().unwrap();
        assert!(pool.bytes.iter().all(|&b| b == 0));
        assert_eq!(pool.pos, POOL_SIZE);
    }
}

//! Exit handling: signal handlers and RNG state wiping.

use crate::entropy;

/// Registered with atexit - runs on any normal exit
extern "C" fn cleanup_on_exit() {
    if entropy::is_urandom_enabled() {
        entropy::disable_urandom();
    }
    entropy::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP - exit, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - wipe RNG state, then re-raise for the default action
extern "C" fn crash_handler(sig: libc::c_int) {
    entropy::urand::emergency_zero();
    entropy::zeroize_state();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    let exit = signal_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;
    let crash = crash_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;

    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, exit);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash);
        }
    }
}

/// Keep passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

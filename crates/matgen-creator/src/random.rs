//! Shared random source for all creators.
//!
//! Creators hold no random state of their own. Every draw goes through a
//! thread-local [`StdRng`], so creators can be shared freely and each test
//! thread gets an independent, reproducible stream.
//!
//! The process-wide seed is read once from `MATGEN_SEED` (falling back to
//! [`DEFAULT_SEED`]) and can be replaced with [`set_seed`]. A thread's
//! generator is seeded from the process-wide seed on its first draw.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Environment variable holding the initial seed.
pub const SEED_ENV: &str = "MATGEN_SEED";

/// Seed used when `MATGEN_SEED` is unset or invalid.
pub const DEFAULT_SEED: u64 = 5489;

fn initial_seed() -> u64 {
    match std::env::var(SEED_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid {SEED_ENV}, using default seed");
                DEFAULT_SEED
            }
        },
        Err(_) => DEFAULT_SEED,
    }
}

fn global_seed() -> &'static AtomicU64 {
    static SEED: OnceLock<AtomicU64> = OnceLock::new();
    SEED.get_or_init(|| AtomicU64::new(initial_seed()))
}

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(seed()));
}

/// The current process-wide seed.
pub fn seed() -> u64 {
    global_seed().load(Ordering::Relaxed)
}

/// Replace the process-wide seed and reseed the calling thread.
///
/// Other threads keep their current stream; threads that draw for the first
/// time afterwards start from the new seed.
pub fn set_seed(seed: u64) {
    global_seed().store(seed, Ordering::Relaxed);
    RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
    tracing::debug!(seed, "Random seed set");
}

/// Restart the calling thread's stream from the process-wide seed.
pub fn reseed() {
    let seed = seed();
    RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
}

/// Run `f` with exclusive access to the calling thread's generator.
///
/// `f` must not draw through another creator: the generator is borrowed for
/// the duration of the call.
pub fn with_rng<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_set_seed_is_reproducible() {
        set_seed(42);
        let first: Vec<u32> = (0..8).map(|_| with_rng(|rng| rng.gen())).collect();
        set_seed(42);
        let second: Vec<u32> = (0..8).map(|_| with_rng(|rng| rng.gen())).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        // Other tests may replace the process-wide seed concurrently, so
        // compare against every seed reseed() could have picked up.
        set_seed(7);
        let _: u64 = with_rng(|rng| rng.gen());
        let before = seed();
        reseed();
        let after = seed();
        let again: u64 = with_rng(|rng| rng.gen());
        let expected = |s| StdRng::seed_from_u64(s).gen::<u64>();
        assert!(again == expected(before) || again == expected(after));
    }

    #[test]
    fn test_threads_have_independent_streams() {
        set_seed(99);
        let here: u64 = with_rng(|rng| rng.gen());
        let there = std::thread::spawn(|| {
            set_seed(99);
            with_rng(|rng| rng.gen::<u64>())
        })
        .join()
        .unwrap();
        assert_eq!(here, there);
    }
}

//! Call-site ordinal assignment.
//!
//! Each macro expansion burns one ordinal from a process-global
//! counter, so every expansion site in a build gets a distinct key
//! family. The counter is offset by a salt drawn once per build from a
//! time-seeded generator: rebuilding the program moves every key, while
//! within one build the ordinals stay fixed across every execution of
//! the produced binary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static SITE_COUNTER: AtomicU64 = AtomicU64::new(1);
static BUILD_SALT: OnceLock<u64> = OnceLock::new();

fn build_salt() -> u64 {
    *BUILD_SALT.get_or_init(|| {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed_0f_ca11);
        StdRng::seed_from_u64(seed).gen()
    })
}

/// Next unique call-site ordinal for this build.
pub fn next_ordinal() -> u64 {
    build_salt().wrapping_add(SITE_COUNTER.fetch_add(1, Ordering::Relaxed))
}

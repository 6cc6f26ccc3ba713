//! Call-site key derivation.
//!
//! Every guarded call site owns a small ordinal assigned at build time.
//! The ordinals are sequential, so they must never be used as keys
//! directly; instead they are pushed through a 64-bit avalanche mix
//! (the splitmix64 finalizer) so that neighbouring call sites end up
//! with keys that share no usable arithmetic relation.

/// Weyl increment for the ordinal sequence (2^64 / φ, forced odd).
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Multiplier for the self-cancelling address fold in [`fold_key`].
const FOLD_MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

/// Murmur3-style 64-bit finalizer. Full avalanche: every input bit
/// affects every output bit with probability ~1/2.
pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}

/// Derive the key for a call-site ordinal.
///
/// Total and deterministic, and a `const fn`, so the key is a build-time
/// constant wherever the ordinal is. `mix64` is a bijection, which means
/// distinct ordinals can never collide on a key.
pub const fn derive_key(ordinal: u64) -> u64 {
    mix64(ordinal.wrapping_mul(GOLDEN_GAMMA))
}

/// XOR the address with a multiplied key image.
///
/// Applying the fold twice with the same key is the identity; the
/// layered protocols use a fold pair as an inert "correction" step that
/// an attacker patching one of the two applications will break.
pub const fn fold_key(addr: usize, key: u64) -> usize {
    addr ^ (key.wrapping_mul(FOLD_MULTIPLIER) as usize)
}

/// The key sequence for one call site.
///
/// A protocol pulls as many keys as its composition needs from the
/// stream; the first key is exactly `derive_key(ordinal)`, later keys
/// walk the ordinal along [`GOLDEN_GAMMA`] before mixing. The stream
/// never yields zero: a zero key would turn the check scalars built
/// from it into the failure sentinel itself.
#[derive(Clone)]
pub struct KeyStream {
    state: u64,
}

impl KeyStream {
    pub const fn new(ordinal: u64) -> Self {
        KeyStream { state: ordinal }
    }

    pub fn next_key(&mut self) -> u64 {
        loop {
            let key = derive_key(self.state);
            self.state = self.state.wrapping_add(GOLDEN_GAMMA);
            if key != 0 {
                return key;
            }
        }
    }
}

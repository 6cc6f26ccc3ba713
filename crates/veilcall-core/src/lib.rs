//! Core primitives of the VEILCALL call-obfuscation toolkit.
//!
//! Wraps ordinary function invocations so that the target address and a
//! set of integrity tokens are never stored in memory in directly
//! readable form. The protection is probabilistic and anti-casual: it
//! raises the cost of disassembly, hooking and breakpoint tampering,
//! and makes detected tampering indistinguishable from a call that
//! returned zero. It is NOT a defense against an attacker with full
//! read/write access and single-step control.
//!
//! Layers, leaves first:
//! - [`key`]: deterministic call-site ordinal to wide key derivation
//! - [`opaque`]: non-elidable reads and inert decoys
//! - [`encode`]: XOR value encoders, single-key and redundant
//! - [`guard`]: obfuscated function-address holders
//! - [`ctx`]: the check-then-call invocation wrapper
//! - [`protocol`]: the ten call-guard compositions
//!
//! Failed integrity checks are silently converted to the return type's
//! zero value; nothing is logged, thrown or reported anywhere in this
//! crate, by design.

pub mod ctx;
pub mod encode;
pub mod guard;
pub mod key;
pub mod opaque;
pub mod protocol;

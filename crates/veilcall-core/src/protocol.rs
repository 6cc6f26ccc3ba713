//! The call-guard protocols.
//!
//! Ten fixed compositions of the encoders, guards and the invocation
//! wrapper, ordered roughly by how many independent layers must all
//! pass before the real call happens. The contract is uniform: given a
//! call-site ordinal, a target and its arguments, return the target's
//! true result when every embedded check passes, or the return type's
//! zero value (without dispatching) when any check fails.
//!
//! Everything here is `#[inline(always)]` so each call site gets its
//! own copy of the checks instead of funnelling through one
//! identifiable guard routine.
//!
//! Keys are pulled from the site's [`KeyStream`]; the decoy loops and
//! gates are inert (see [`crate::opaque`]) and may be removed without
//! changing any observable result.

use crate::ctx::{CallContext, ZeroValue};
use crate::encode::{Encoded, Redundant2, Redundant3};
use crate::guard::{DispatchTable, DualGuard, Invoke, PtrGuard};
use crate::key::{fold_key, KeyStream};
use crate::opaque;

/// Wrapper plus a single check scalar.
#[inline(always)]
pub fn basic<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let check = keys.next_key();
    CallContext::new(move || target.invoke(args), check).invoke()
}

/// Pointer-guarded target plus a single encoded check.
#[inline(always)]
pub fn protected<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let k1 = keys.next_key();
    let k2 = keys.next_key();
    let real = PtrGuard::new(target, k1).resolve();
    let check = Encoded::new(k2, k2);
    if check.decode() != k2 {
        return F::Output::zero();
    }
    real.invoke(args)
}

/// Two encoded checks, then a pointer-guarded dispatch behind a live
/// scalar read.
#[inline(always)]
pub fn secure<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let k1 = keys.next_key();
    let k2 = keys.next_key();
    let k3 = keys.next_key();
    let e1 = Encoded::new(k1, k1);
    let e2 = Encoded::new(k2, k2);
    if e1.decode() != k1 || e2.decode() != k2 {
        return F::Output::zero();
    }
    let real = PtrGuard::new(target, k3).resolve();
    if opaque::read(&k3) == 0 {
        return F::Output::zero();
    }
    real.invoke(args)
}

/// XOR round trip of the address through a volatile slot, no check
/// scalar, one inert gate.
#[inline(always)]
pub fn indirect<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let key = keys.next_key() as usize;
    let slot = target.addr() ^ key;
    let addr = opaque::read(&slot) ^ key;
    if opaque::false_gate() {
        return F::Output::zero();
    }
    // SAFETY: two XORs with one key cancel, so `addr` is the address
    // taken from `target` above.
    let real = unsafe { F::from_addr(addr) };
    real.invoke(args)
}

/// Dual-guarded target address, nothing else.
#[inline(always)]
pub fn fortified<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let guard = DualGuard::new(target, [keys.next_key(), keys.next_key()]);
    match guard.resolve() {
        Some(real) => real.invoke(args),
        None => F::Output::zero(),
    }
}

/// Triple-redundant check scalar, pointer-guarded target, secondary
/// live scalar check.
#[inline(always)]
pub fn armored<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let k1 = keys.next_key();
    let k2 = keys.next_key();
    let k3 = keys.next_key();
    let sentinel = Redundant3::new(k1, [k1, k2, k3]);
    if sentinel.decode() != k1 {
        return F::Output::zero();
    }
    let real = PtrGuard::new(target, k2).resolve();
    if opaque::read(&k3) == 0 {
        return F::Output::zero();
    }
    real.invoke(args)
}

/// Dual-redundant address encoding plus an inert parity loop.
#[inline(always)]
pub fn stealth<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let enc = Redundant2::new(target.addr(), [keys.next_key(), keys.next_key()]);
    let addr = enc.decode();
    if opaque::xor_parity(3) != 0 {
        return F::Output::zero();
    }
    if addr == 0 {
        return F::Output::zero();
    }
    // SAFETY: a nonzero decode means both copies agreed on the address
    // captured from `target`; divergence yields the zero sentinel and
    // is rejected above.
    let real = unsafe { F::from_addr(addr) };
    real.invoke(args)
}

/// Two encoded scalars, one dual-redundant scalar, a dual-guarded
/// address and a final live check.
#[inline(always)]
pub fn layered<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let k1 = keys.next_key();
    let k2 = keys.next_key();
    let k3 = keys.next_key();
    let k4 = keys.next_key();
    let e1 = Encoded::new(k1, k1);
    let e2 = Encoded::new(k2, k2);
    let e3 = Redundant2::new(k3, [k3, k4]);
    if e1.decode() != k1 || e2.decode() != k2 || e3.decode() != k3 {
        return F::Output::zero();
    }
    let guard = DualGuard::new(target, [k1, k2]);
    let real = match guard.resolve() {
        Some(real) => real,
        None => return F::Output::zero(),
    };
    if opaque::read(&k4) == 0 {
        return F::Output::zero();
    }
    real.invoke(args)
}

/// Triple-redundant address, dual-redundant scalar, inert busy loop and
/// a self-cancelling key fold on the address.
#[inline(always)]
pub fn ultimate<F, A>(ordinal: u64, target: F, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let k1 = keys.next_key();
    let k2 = keys.next_key();
    let k3 = keys.next_key();
    let k4 = keys.next_key();
    let k5 = keys.next_key();
    let fold = keys.next_key();
    let addr_enc = Redundant3::new(target.addr(), [k1, k2, k3]);
    let val_enc = Redundant2::new(k4, [k4, k5]);
    if val_enc.decode() != k4 {
        return F::Output::zero();
    }
    let mut addr = addr_enc.decode();
    if addr == 0 {
        return F::Output::zero();
    }
    if opaque::triangle(5) != 10 {
        return F::Output::zero();
    }
    addr = fold_key(addr, fold);
    addr = fold_key(addr, fold);
    // SAFETY: all three copies agreed on the captured address and the
    // fold pair cancels exactly.
    let real = unsafe { F::from_addr(addr) };
    real.invoke(args)
}

/// Table dispatch: the selected slot is fetched through a volatile
/// read, round-tripped through a pointer guard, and an out-of-range
/// index fails closed.
#[inline(always)]
pub fn dispatch<F, A>(ordinal: u64, table: &[F], index: usize, args: A) -> F::Output
where
    F: Invoke<A>,
    F::Output: ZeroValue,
{
    let mut keys = KeyStream::new(ordinal);
    let table = DispatchTable::new(table);
    match table.fetch(index, keys.next_key()) {
        Some(real) => real.invoke(args),
        None => F::Output::zero(),
    }
}

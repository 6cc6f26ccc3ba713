//! Integration tests for the protocol functions called directly with
//! explicit call-site ordinals.

extern crate veilcall_core;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veilcall_core::protocol;

// ═══ Representative targets ═══

fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

fn divide(n: f64, d: f64) -> f64 {
    if d != 0.0 {
        n / d
    } else {
        0.0
    }
}

// ═══ Concrete scenarios ═══

#[test]
fn test_basic_addition() {
    let f = add as fn(i32, i32) -> i32;
    assert_eq!(protocol::basic(1, f, (10, 5)), 15);
}

#[test]
fn test_protected_multiplication() {
    let f = multiply as fn(i32, i32) -> i32;
    assert_eq!(protocol::protected(2, f, (7, 8)), 56);
}

#[test]
fn test_secure_addition() {
    let f = add as fn(i32, i32) -> i32;
    assert_eq!(protocol::secure(3, f, (15, 3)), 18);
}

#[test]
fn test_indirect_multiplication() {
    let f = multiply as fn(i32, i32) -> i32;
    assert_eq!(protocol::indirect(4, f, (4, 9)), 36);
}

#[test]
fn test_fortified_addition() {
    let f = add as fn(i32, i32) -> i32;
    assert_eq!(protocol::fortified(5, f, (100, 50)), 150);
}

#[test]
fn test_armored_multiplication() {
    let f = multiply as fn(i32, i32) -> i32;
    assert_eq!(protocol::armored(6, f, (12, 3)), 36);
}

#[test]
fn test_stealth_addition() {
    let f = add as fn(i32, i32) -> i32;
    assert_eq!(protocol::stealth(7, f, (25, 25)), 50);
}

#[test]
fn test_layered_multiplication() {
    let f = multiply as fn(i32, i32) -> i32;
    assert_eq!(protocol::layered(8, f, (6, 7)), 42);
}

#[test]
fn test_ultimate_division() {
    let f = divide as fn(f64, f64) -> f64;
    assert_eq!(protocol::ultimate(9, f, (100.0, 4.0)), 25.0);
}

#[test]
fn test_ultimate_division_by_zero_guarded_by_callee() {
    // The zero comes from the wrapped function's own guard, not from
    // any integrity failure in the protocol.
    let f = divide as fn(f64, f64) -> f64;
    assert_eq!(protocol::ultimate(10, f, (123.0, 0.0)), 0.0);
}

#[test]
fn test_dispatch_table() {
    let ops: [fn(i32, i32) -> i32; 2] = [add, multiply];
    assert_eq!(protocol::dispatch(11, &ops, 0, (2, 3)), 5);
    assert_eq!(protocol::dispatch(12, &ops, 1, (2, 3)), 6);
    assert_eq!(protocol::dispatch(13, &ops, 9, (2, 3)), 0);
}

// ═══ Sampled equality and idempotence ═══

#[test]
fn test_all_protocols_match_plain_call_on_sampled_inputs() {
    let f = add as fn(i32, i32) -> i32;
    let mut rng = StdRng::seed_from_u64(99);
    for round in 0..100u64 {
        let x: i32 = rng.gen_range(-10_000..10_000);
        let y: i32 = rng.gen_range(-10_000..10_000);
        let expected = x + y;
        let ordinal = 1000 + round;
        assert_eq!(protocol::basic(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::protected(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::secure(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::indirect(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::fortified(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::armored(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::stealth(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::layered(ordinal, f, (x, y)), expected);
        assert_eq!(protocol::ultimate(ordinal, f, (x, y)), expected);
    }
}

#[test]
fn test_repeat_invocation_is_stable() {
    let f = divide as fn(f64, f64) -> f64;
    let first = protocol::ultimate(77, f, (81.0, 3.0));
    let second = protocol::ultimate(77, f, (81.0, 3.0));
    assert_eq!(first, 27.0);
    assert_eq!(first, second);
}

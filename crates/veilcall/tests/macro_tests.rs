//! Integration tests for the call-site macros.
//!
//! Each macro expansion references `veilcall_core` directly, so the
//! crate must be linked alongside the facade.

extern crate veilcall_core;

use veilcall::prelude::*;

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

fn answer() -> u32 {
    42
}

#[test]
fn test_every_macro_form() {
    assert_eq!(basic_call!(add(10, 5)), 15);
    assert_eq!(protected_call!(multiply(7, 8)), 56);
    assert_eq!(secure_call!(add(15, 3)), 18);
    assert_eq!(indirect_call!(multiply(4, 9)), 36);
    assert_eq!(fortified_call!(add(100, 50)), 150);
    assert_eq!(armored_call!(multiply(12, 3)), 36);
    assert_eq!(stealth_call!(add(25, 25)), 50);
    assert_eq!(layered_call!(multiply(6, 7)), 42);
    assert_eq!(ultimate_call!(divide(100.0, 4.0)), 25.0);
}

#[test]
fn test_macro_results_match_direct_calls() {
    for x in [-3i32, 0, 9, 1000] {
        assert_eq!(fortified_call!(add(x, 11)), add(x, 11));
        assert_eq!(ultimate_call!(multiply(x, -2)), multiply(x, -2));
    }
}

#[test]
fn test_nullary_target() {
    assert_eq!(stealth_call!(answer()), 42);
}

#[test]
fn test_expression_arguments() {
    let base = 40;
    assert_eq!(armored_call!(add(base + 2, answer() as i32 - 42)), 42);
}

#[test]
fn test_repeat_invocations_share_the_site_keys() {
    let mut results = Vec::new();
    for _ in 0..10 {
        results.push(layered_call!(multiply(6, 7)));
    }
    assert!(results.iter().all(|&r| r == 42));
}

#[test]
fn test_dispatch_macro() {
    let ops: [fn(i32, i32) -> i32; 2] = [add, multiply];
    assert_eq!(dispatch_call!(ops[0](6, 7)), 13);
    assert_eq!(dispatch_call!(ops[1](6, 7)), 42);
    let oob = 5usize;
    assert_eq!(dispatch_call!(ops[oob](6, 7)), 0);
}

#[test]
fn test_division_by_zero_comes_back_as_zero() {
    assert_eq!(ultimate_call!(divide(5.0, 0.0)), 0.0);
}

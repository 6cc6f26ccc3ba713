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

fn main() {
    println!("=== veilcall ===\n");

    let r1 = basic_call!(add(10, 5));
    println!("Basic:     {}", r1);

    let r2 = protected_call!(multiply(7, 8));
    println!("Protected: {}", r2);

    let r3 = secure_call!(add(15, 3));
    println!("Secure:    {}", r3);

    let r4 = indirect_call!(multiply(4, 9));
    println!("Indirect:  {}", r4);

    let r5 = fortified_call!(add(100, 50));
    println!("Fortified: {}", r5);

    let r6 = armored_call!(multiply(12, 3));
    println!("Armored:   {}", r6);

    let r7 = stealth_call!(add(25, 25));
    println!("Stealth:   {}", r7);

    let r8 = layered_call!(multiply(6, 7));
    println!("Layered:   {}", r8);

    let r9 = ultimate_call!(divide(100.0, 4.0));
    println!("Ultimate:  {:.2}", r9);

    let ops: [fn(i32, i32) -> i32; 2] = [add, multiply];
    let r10 = dispatch_call!(ops[1](6, 7));
    println!("Dispatch:  {}", r10);

    println!("\nDone.");
}

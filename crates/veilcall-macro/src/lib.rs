use proc_macro::TokenStream;

mod expand;
mod site;

use expand::Protocol;

fn emit(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Guard a call with the basic protocol: one check scalar in front of
/// the dispatch.
///
/// The expansion assigns this site a fresh build-time ordinal, so two
/// textually identical invocations in different places use unrelated
/// keys.
///
/// # Example
/// ```ignore
/// let sum: i32 = veilcall::basic_call!(add(10, 5));
/// ```
#[proc_macro]
pub fn basic_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Basic))
}

/// Guard a call with a pointer-guarded target address plus an encoded
/// check scalar.
///
/// # Example
/// ```ignore
/// let product = veilcall::protected_call!(multiply(7, 8));
/// ```
#[proc_macro]
pub fn protected_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Protected))
}

/// Guard a call with two encoded check scalars and a pointer-guarded
/// target.
#[proc_macro]
pub fn secure_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Secure))
}

/// Guard a call by XOR round-tripping the target address through a
/// volatile slot. No check scalar; obfuscation only.
#[proc_macro]
pub fn indirect_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Indirect))
}

/// Guard a call with a dual-keyed copy of the target address; a patch
/// to either copy withholds the dispatch.
#[proc_macro]
pub fn fortified_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Fortified))
}

/// Guard a call with a triple-redundant check scalar, a pointer-guarded
/// target and a secondary scalar check.
#[proc_macro]
pub fn armored_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Armored))
}

/// Guard a call with a dual-redundant encoding of the target address,
/// padded with an inert parity loop.
#[proc_macro]
pub fn stealth_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Stealth))
}

/// Guard a call with two encoded scalars, a dual-redundant scalar and a
/// dual-guarded target address.
#[proc_macro]
pub fn layered_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Layered))
}

/// The heaviest composition: triple-redundant address encoding,
/// dual-redundant check scalar, an inert busy loop and a
/// self-cancelling key fold over the address.
///
/// # Example
/// ```ignore
/// let q: f64 = veilcall::ultimate_call!(divide(100.0, 4.0));
/// ```
#[proc_macro]
pub fn ultimate_call(input: TokenStream) -> TokenStream {
    emit(expand::guarded_call(input.into(), Protocol::Ultimate))
}

/// Guard a call dispatched through an indexed table of same-signature
/// function pointers. The slot is fetched through a volatile read and
/// pointer-guarded; an out-of-range index returns the zero value
/// without calling anything.
///
/// # Example
/// ```ignore
/// static OPS: [fn(i32, i32) -> i32; 2] = [add, multiply];
/// let r = veilcall::dispatch_call!(OPS[1](6, 7));
/// ```
#[proc_macro]
pub fn dispatch_call(input: TokenStream) -> TokenStream {
    emit(expand::dispatch_call(input.into()))
}

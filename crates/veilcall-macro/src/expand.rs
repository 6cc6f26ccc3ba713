//! Expansion of the per-protocol call macros.
//!
//! A guarded call site expands to a block that coerces the callee to
//! its `fn` pointer type (the arity is known from the argument list,
//! the parameter and return types are left to inference) and hands it,
//! with a fresh build-time ordinal, to the matching composition in
//! `veilcall_core::protocol`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, ExprCall};

use crate::site;

#[derive(Clone, Copy)]
pub enum Protocol {
    Basic,
    Protected,
    Secure,
    Indirect,
    Fortified,
    Armored,
    Stealth,
    Layered,
    Ultimate,
}

impl Protocol {
    fn path(self) -> TokenStream {
        match self {
            Protocol::Basic => quote!(basic),
            Protocol::Protected => quote!(protected),
            Protocol::Secure => quote!(secure),
            Protocol::Indirect => quote!(indirect),
            Protocol::Fortified => quote!(fortified),
            Protocol::Armored => quote!(armored),
            Protocol::Stealth => quote!(stealth),
            Protocol::Layered => quote!(layered),
            Protocol::Ultimate => quote!(ultimate),
        }
    }
}

fn parse_call(input: TokenStream) -> syn::Result<ExprCall> {
    match syn::parse2::<Expr>(input)? {
        Expr::Call(call) => Ok(call),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a plain function call like `target(arg, ...)`",
        )),
    }
}

/// Expand one of the nine direct-call protocols.
pub fn guarded_call(input: TokenStream, protocol: Protocol) -> syn::Result<TokenStream> {
    let call = parse_call(input)?;
    let func = match &*call.func {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "the callee must be a function path, not a closure or method",
            ))
        }
    };
    let args: Vec<&Expr> = call.args.iter().collect();
    let blanks: Vec<TokenStream> = args.iter().map(|_| quote!(_)).collect();
    let ordinal = proc_macro2::Literal::u64_suffixed(site::next_ordinal());
    let proto = protocol.path();
    Ok(quote! {{
        let __veil_target: fn(#(#blanks),*) -> _ = #func;
        ::veilcall_core::protocol::#proto(#ordinal, __veil_target, (#(#args,)*))
    }})
}

/// Expand `dispatch_call!(table[index](arg, ...))`.
pub fn dispatch_call(input: TokenStream) -> syn::Result<TokenStream> {
    let call = parse_call(input)?;
    let indexed = match &*call.func {
        Expr::Index(indexed) => indexed,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "expected an indexed table call like `table[index](arg, ...)`",
            ))
        }
    };
    let table = &indexed.expr;
    let index = &indexed.index;
    let args: Vec<&Expr> = call.args.iter().collect();
    let ordinal = proc_macro2::Literal::u64_suffixed(site::next_ordinal());
    Ok(quote! {{
        ::veilcall_core::protocol::dispatch(#ordinal, &#table, #index, (#(#args,)*))
    }})
}

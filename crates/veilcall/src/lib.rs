//! VEILCALL: call obfuscation for hardened native binaries.
//!
//! Wrap a sensitive function call in one of ten guard protocols and the
//! target address plus the integrity tokens around it never sit in
//! memory in raw form. Any detected tampering is converted into the
//! return type's zero value, indistinguishable from a legitimate zero
//! result.
//!
//! ```ignore
//! use veilcall::prelude::*;
//!
//! fn add(x: i32, y: i32) -> i32 { x + y }
//!
//! let sum = basic_call!(add(10, 5));        // 15
//! let sum = fortified_call!(add(10, 5));    // 15, dual-guarded address
//! ```
//!
//! The macros assign each expansion site a distinct build-time ordinal;
//! the protocol functions in [`protocol`] take the ordinal explicitly
//! for callers that manage their own sites.

pub use veilcall_core::{ctx, encode, guard, key, opaque, protocol};

pub use veilcall_macro::{
    armored_call, basic_call, dispatch_call, fortified_call, indirect_call, layered_call,
    protected_call, secure_call, stealth_call, ultimate_call,
};

pub mod prelude {
    pub use veilcall_core::ctx::{CallContext, ZeroValue};
    pub use veilcall_core::encode::{Encoded, Redundant2, Redundant3, Word};
    pub use veilcall_core::guard::{DispatchTable, DualGuard, FnPtr, Invoke, PtrGuard};
    pub use veilcall_core::key::{derive_key, KeyStream};
    pub use veilcall_macro::{
        armored_call, basic_call, dispatch_call, fortified_call, indirect_call, layered_call,
        protected_call, secure_call, stealth_call, ultimate_call,
    };
}

//! Shared vocabulary for the ZMEM wire codec: the closed kind taxonomy, the layout/encode/decode
//! traits generated `impl`s and hand-written types both plug into, the reflection contract the
//! derive macro emits, and the flat error type every fallible operation returns.
//!
//! `no_std` by default; enable the `std` feature for `Display`/`std::error::Error` on
//! [`error::Error`].

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod error;
pub mod fixed;
pub mod kind;
pub mod layout;
pub mod mode;
pub mod reflect;
pub mod sink;

pub use codec::{Decode, Encode};
pub use error::{Error, ErrorKind, Result};
pub use fixed::{FixedDecode, FixedEncode};
pub use kind::Kind;
pub use layout::{InlineRef, Layout};
pub use mode::ReadMode;
pub use reflect::{Field, Reflect};
pub use sink::Sink;

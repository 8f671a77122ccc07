//! # Twos Bigint
//!
//! Arbitrary-precision signed integers stored the way hardware stores
//! fixed-width ones: as two's-complement machine words, least significant
//! first. Instead of a separate sign, each value carries a flag saying
//! whether the infinitely many bits above its stored words are all ones.
//!
//! ```
//! use twos_bigint::BigInt;
//!
//! let max = BigInt::from_fixed(twos_bigint::Limb::MAX.into())?;
//! let one = BigInt::from_fixed(1)?;
//! let sum = max.add(&one)?;
//! assert_eq!(sum.limbs(), [0, 1]);
//! assert!(!sum.is_negative());
//! # Ok::<(), twos_bigint::Error>(())
//! ```
//!
//! # Canonical form
//!
//! Every `BigInt` is kept in its shortest form: the most significant stored
//! word never equals the word implied by the sign. Zero stores no words and
//! so does `-1`. Two values are numerically equal exactly when they are
//! structurally equal, so `==` and `Hash` are derived.
//!
//! # Fallible allocation
//!
//! Every operation that may need to grow storage returns a [`Result`], and
//! reports [`Category::Alloc`](crate::error::Category::Alloc) instead of
//! aborting when memory runs out. Operations that mutate in place leave the
//! value unchanged on failure.
//!
//! # Limb width
//!
//! [`Limb`] is `u64` on 64-bit targets and `u32` elsewhere. [`SignedWide`]
//! is the native signed integer one bit wider than a limb, rounded up to
//! the next available width.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! twos_bigint = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/twos_bigint/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::unreadable_literal,
    // integer conversions are the point of the crate
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
// Ignored clippy_pedantic lints
#![allow(
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    // noisy
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

pub use crate::bigint::BigInt;
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::math::{Limb, SignedWide, LIMB_BITS};
pub use crate::parse::{ParseBigIntError, ParseErrorKind};

/// Target used for every `tracing` event emitted by this crate.
pub(crate) const LOG_TARGET: &str = "twos_bigint";

mod arith;
mod bigint;
mod convert;
pub mod error;
mod features_check;
mod math;
mod parse;
#[cfg(feature = "serde")]
mod serialize;
mod write;

//! A set of the integers `0..=63`, stored in a single `u64`.
//! `no_std`, no heap / `alloc`, no `unsafe`, only `core`.
//!
//! [`BitField`] is the main type in this library. It is a plain `Copy`
//! value: every "mutating" method returns a new field and leaves the
//! receiver untouched.
//!
//! # Examples
//! ```
//! use bitfield64::BitField;
//!
//! let field = BitField::EMPTY.set(5).set(1).set(3);
//! assert_eq!(field.count(), 3);
//! assert!(field.test(3));
//! assert_eq!(field.least(), Some(1));
//! assert_eq!(field.most(), Some(5));
//! assert_eq!(field.to_string(), "1 3 5");
//!
//! let cleared = field.unset(3);
//! assert!(!cleared.test(3));
//! assert!(field.test(3)); // the original is unchanged
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Constant-time queries backed by the `u64` bit intrinsics:
//!   - `count`, `is_empty`, `is_singular`
//!   - `least`, `most`
//! - Lenient `const` constructors: `of`, `range`
//! - Snapshot iteration over set positions in ascending order with
//!   [`Iter`], which also runs backwards and knows its exact length
//! - Set algebra as methods and operators:
//!   - `|`, `&`, `^`, `-`, `!`
//!   - `|=`, `&=`, `^=`, `-=`
//! - A space-separated string form via `Display`, parsed back with `FromStr`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(test)]
extern crate std;

mod bitfield;
mod parse;

pub use bitfield::{BitField, Iter, WIDTH};
pub use parse::ParseBitFieldError;

//! # crdt-value
//!
//! Typed scalar values for CRDT documents.
//!
//! A CRDT document stores each field as a tagged [`Value`]: either a nested
//! object or one of a closed set of [`ScalarValue`] variants. This crate
//! provides the domain types application code works with and the conversion
//! protocol that moves them in and out of that tagged representation.
//!
//! ## Quick Start
//!
//! ```
//! use crdt_value::prelude::*;
//!
//! // Write a counter into a document field
//! let likes = Counter::new(12);
//! let field: Value = likes.to_value();
//!
//! // Read it back
//! assert_eq!(Counter::from_value(field), Ok(likes));
//!
//! // Reading a field of the wrong kind reports what was found
//! let err = Counter::from_value(Value::Scalar(ScalarValue::String("12".into())));
//! assert!(err.is_err());
//! ```
//!
//! ## Scalar Types
//!
//! | Rust type     | Variant                     | Error                                |
//! |---------------|-----------------------------|--------------------------------------|
//! | [`Counter`]   | [`ScalarValue::Counter`]    | [`CounterScalarConversionError`]     |
//! | [`Timestamp`] | [`ScalarValue::Timestamp`]  | [`TimestampScalarConversionError`]   |
//! | `bool`        | [`ScalarValue::Boolean`]    | [`BooleanScalarConversionError`]     |
//! | `String`      | [`ScalarValue::String`]     | [`StringScalarConversionError`]      |
//! | `i64`         | [`ScalarValue::Int`]        | [`IntScalarConversionError`]         |
//! | `u64`         | [`ScalarValue::Uint`]       | [`UintScalarConversionError`]        |
//! | `f64`         | [`ScalarValue::F64`]        | [`DoubleScalarConversionError`]      |
//! | `Vec<u8>`     | [`ScalarValue::Bytes`]      | [`BytesScalarConversionError`]       |
//!
//! Each error has exactly one case, carrying the [`Value`] that was found.
//!
//! ## The `ScalarValueRepresentable` Trait
//!
//! All types implement [`ScalarValueRepresentable`]. Lifting into a
//! [`Value`] is total; narrowing fails only on a tag mismatch.
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and `SystemTime` bridges.
//!   Without it the crate is `no_std` and needs only `alloc`.
//! - `serde`: `Serialize`/`Deserialize` for every value and domain type.
//! - `tracing`: emits a `debug` event for every conversion tag mismatch.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod boolean;
mod bytes;
mod convert;
mod counter;
mod float;
mod int;
mod string;
mod timestamp;
mod uint;
mod value;

pub mod prelude;

pub use boolean::BooleanScalarConversionError;
pub use bytes::BytesScalarConversionError;
pub use convert::ScalarValueRepresentable;
pub use counter::{Counter, CounterScalarConversionError};
pub use float::DoubleScalarConversionError;
pub use int::IntScalarConversionError;
pub use string::StringScalarConversionError;
pub use timestamp::{Timestamp, TimestampScalarConversionError};
pub use uint::UintScalarConversionError;
pub use value::{ObjId, ObjType, ScalarValue, Value};

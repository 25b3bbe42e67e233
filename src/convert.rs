use core::fmt;

use crate::{ScalarValue, Value};

/// Conversion between a domain type and the document's tagged [`Value`].
///
/// Every scalar domain type maps to exactly one [`ScalarValue`] variant.
/// Lifting a value into the document is total; narrowing a document value
/// back to the domain type fails only when the tag does not match, and the
/// error carries the value that was actually found.
///
/// # Laws
///
/// For every `x` of an implementing type:
/// - **Round trip:** `T::from_value(x.to_value()) == Ok(x)`
/// - **Totality:** `from_value` returns for every input, never panics
///
/// # Example
///
/// ```
/// use crdt_value::prelude::*;
///
/// let counter = Counter::new(42);
/// let value = counter.to_value();
/// assert_eq!(value, Value::Scalar(ScalarValue::Counter(42)));
/// assert_eq!(Counter::from_value(value), Ok(counter));
///
/// let err = Counter::from_value(Value::Scalar(ScalarValue::Boolean(true))).unwrap_err();
/// assert!(err.to_string().contains("true"));
/// ```
pub trait ScalarValueRepresentable: Sized {
    /// The tag-mismatch error for this type.
    type ConvertError: fmt::Debug + fmt::Display;

    /// Narrow a document value to this type.
    fn from_value(value: Value) -> Result<Self, Self::ConvertError>;

    /// Lift this value into its scalar representation.
    fn to_scalar_value(&self) -> ScalarValue;

    /// Narrow a bare scalar to this type.
    fn from_scalar_value(scalar: ScalarValue) -> Result<Self, Self::ConvertError> {
        Self::from_value(Value::Scalar(scalar))
    }

    /// Lift this value into a document field value.
    fn to_value(&self) -> Value {
        Value::Scalar(self.to_scalar_value())
    }
}

/// Hook run on every tag mismatch before the error is returned.
#[inline]
pub(crate) fn mismatch(expected: &'static str, found: &Value) {
    #[cfg(feature = "tracing")]
    tracing::debug!(expected, found = %found, "scalar conversion tag mismatch");
    #[cfg(not(feature = "tracing"))]
    let _ = (expected, found);
}

use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as a `u64`.
#[derive(Debug, Clone, PartialEq)]
pub enum UintScalarConversionError {
    /// The value is not a [`ScalarValue::Uint`].
    NotUint(Value),
}

impl fmt::Display for UintScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotUint(val) => write!(
                f,
                "failed to read the scalar value {val} as an unsigned integer"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UintScalarConversionError {}

impl ScalarValueRepresentable for u64 {
    type ConvertError = UintScalarConversionError;

    fn from_value(value: Value) -> Result<Self, UintScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Uint(n)) => Ok(n),
            other => {
                mismatch("uint", &other);
                Err(UintScalarConversionError::NotUint(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Uint(*self)
    }
}

impl From<u64> for ScalarValue {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

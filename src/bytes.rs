use alloc::vec::Vec;
use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as a byte sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum BytesScalarConversionError {
    /// The value is not a [`ScalarValue::Bytes`].
    NotBytes(Value),
}

impl fmt::Display for BytesScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBytes(val) => write!(f, "failed to read the scalar value {val} as bytes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BytesScalarConversionError {}

impl ScalarValueRepresentable for Vec<u8> {
    type ConvertError = BytesScalarConversionError;

    fn from_value(value: Value) -> Result<Self, BytesScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Bytes(bytes)) => Ok(bytes),
            other => {
                mismatch("bytes", &other);
                Err(BytesScalarConversionError::NotBytes(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Bytes(self.clone())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ScalarValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

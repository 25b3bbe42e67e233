use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum DoubleScalarConversionError {
    /// The value is not a [`ScalarValue::F64`].
    NotDouble(Value),
}

impl fmt::Display for DoubleScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDouble(val) => write!(
                f,
                "failed to read the scalar value {val} as a 64-bit float"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DoubleScalarConversionError {}

impl ScalarValueRepresentable for f64 {
    type ConvertError = DoubleScalarConversionError;

    fn from_value(value: Value) -> Result<Self, DoubleScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::F64(n)) => Ok(n),
            other => {
                mismatch("f64", &other);
                Err(DoubleScalarConversionError::NotDouble(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::F64(*self)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        Self::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_float() {
        assert_eq!(f64::from_scalar_value(ScalarValue::F64(2.5)), Ok(2.5));
    }

    #[test]
    fn nan_keeps_its_bits() {
        let read = f64::from_value(f64::NAN.to_value()).unwrap();
        assert!(read.is_nan());
        assert_eq!(read.to_bits(), f64::NAN.to_bits());
    }

    #[test]
    fn ints_are_not_widened() {
        assert!(f64::from_scalar_value(ScalarValue::Int(2)).is_err());
    }
}

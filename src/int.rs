use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as an `i64`.
#[derive(Debug, Clone, PartialEq)]
pub enum IntScalarConversionError {
    /// The value is not a [`ScalarValue::Int`].
    NotInt(Value),
}

impl fmt::Display for IntScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInt(val) => write!(
                f,
                "failed to read the scalar value {val} as a signed integer"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntScalarConversionError {}

impl ScalarValueRepresentable for i64 {
    type ConvertError = IntScalarConversionError;

    fn from_value(value: Value) -> Result<Self, IntScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Int(n)) => Ok(n),
            other => {
                mismatch("int", &other);
                Err(IntScalarConversionError::NotInt(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Int(*self)
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_int() {
        assert_eq!(i64::from_scalar_value(ScalarValue::Int(-7)), Ok(-7));
        assert_eq!(i64::MIN.to_scalar_value(), ScalarValue::Int(i64::MIN));
    }

    #[test]
    fn counter_is_not_an_int() {
        let err = i64::from_scalar_value(ScalarValue::Counter(-7)).unwrap_err();
        assert_eq!(
            err,
            IntScalarConversionError::NotInt(Value::Scalar(ScalarValue::Counter(-7)))
        );
    }

    #[test]
    fn uint_is_not_an_int() {
        assert!(i64::from_scalar_value(ScalarValue::Uint(7)).is_err());
    }
}

use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as a `bool`.
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanScalarConversionError {
    /// The value is not a [`ScalarValue::Boolean`].
    NotBoolean(Value),
}

impl fmt::Display for BooleanScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBoolean(val) => write!(f, "failed to read the scalar value {val} as a boolean"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BooleanScalarConversionError {}

impl ScalarValueRepresentable for bool {
    type ConvertError = BooleanScalarConversionError;

    fn from_value(value: Value) -> Result<Self, BooleanScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Boolean(b)) => Ok(b),
            other => {
                mismatch("boolean", &other);
                Err(BooleanScalarConversionError::NotBoolean(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Boolean(*self)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn reads_boolean() {
        assert_eq!(bool::from_scalar_value(ScalarValue::Boolean(false)), Ok(false));
        assert_eq!(true.to_value(), Value::Scalar(ScalarValue::Boolean(true)));
    }

    #[test]
    fn rejects_counter() {
        let err = bool::from_scalar_value(ScalarValue::Counter(1)).unwrap_err();
        assert_eq!(
            err,
            BooleanScalarConversionError::NotBoolean(Value::Scalar(ScalarValue::Counter(1)))
        );
        assert_eq!(
            err.to_string(),
            "failed to read the scalar value Counter(1) as a boolean"
        );
    }
}

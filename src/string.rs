use alloc::string::String;
use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A document value could not be read as a `String`.
#[derive(Debug, Clone, PartialEq)]
pub enum StringScalarConversionError {
    /// The value is not a [`ScalarValue::String`].
    NotString(Value),
}

impl fmt::Display for StringScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotString(val) => write!(f, "failed to read the scalar value {val} as a string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StringScalarConversionError {}

impl ScalarValueRepresentable for String {
    type ConvertError = StringScalarConversionError;

    fn from_value(value: Value) -> Result<Self, StringScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::String(s)) => Ok(s),
            other => {
                mismatch("string", &other);
                Err(StringScalarConversionError::NotString(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::String(self.clone())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn reads_string() {
        let v = ScalarValue::from("hello");
        assert_eq!(String::from_scalar_value(v), Ok(String::from("hello")));
    }

    #[test]
    fn empty_string_round_trips() {
        let s = String::new();
        assert_eq!(String::from_value(s.to_value()), Ok(s));
    }

    #[test]
    fn rejects_bytes() {
        let err = String::from_scalar_value(ScalarValue::Bytes(b"hi".to_vec())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read the scalar value Bytes(6869) as a string"
        );
    }
}

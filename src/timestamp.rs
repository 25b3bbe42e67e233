use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// A point in time stored in a CRDT document.
///
/// Held as milliseconds since the Unix epoch, the resolution used by
/// [`ScalarValue::Timestamp`]. Instants before the epoch are negative.
///
/// # Example
///
/// ```
/// use crdt_value::prelude::*;
///
/// let ts = Timestamp::from_millis(1_700_000_000_000);
/// assert_eq!(ts.to_scalar_value(), ScalarValue::Timestamp(1_700_000_000_000));
/// assert_eq!(Timestamp::from_value(ts.to_value()), Ok(ts));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    /// The Unix epoch.
    pub const UNIX_EPOCH: Self = Self { millis: 0 };

    /// Create a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// This instant as a [`SystemTime`](std::time::SystemTime), or `None` if
    /// the platform clock cannot represent it.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_system_time(&self) -> Option<std::time::SystemTime> {
        let offset = std::time::Duration::from_millis(self.millis.unsigned_abs());
        if self.millis >= 0 {
            std::time::UNIX_EPOCH.checked_add(offset)
        } else {
            std::time::UNIX_EPOCH.checked_sub(offset)
        }
    }

    /// The current wall-clock time, truncated to milliseconds.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from(std::time::SystemTime::now())
    }
}

/// Sub-millisecond precision is truncated toward the epoch. Instants beyond
/// the `i64` millisecond range saturate.
#[cfg(feature = "std")]
impl From<std::time::SystemTime> for Timestamp {
    fn from(time: std::time::SystemTime) -> Self {
        let millis = match time.duration_since(std::time::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis())
                .map(|ms| -ms)
                .unwrap_or(i64::MIN),
        };
        Self { millis }
    }
}


impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

/// A document value could not be read as a [`Timestamp`].
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampScalarConversionError {
    /// The value is not a [`ScalarValue::Timestamp`].
    NotTimestamp(Value),
}

impl fmt::Display for TimestampScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTimestamp(val) => {
                write!(f, "failed to read the scalar value {val} as a timestamp")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimestampScalarConversionError {}

impl ScalarValueRepresentable for Timestamp {
    type ConvertError = TimestampScalarConversionError;

    fn from_value(value: Value) -> Result<Self, TimestampScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Timestamp(millis)) => Ok(Self::from_millis(millis)),
            other => {
                mismatch("timestamp", &other);
                Err(TimestampScalarConversionError::NotTimestamp(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Timestamp(self.millis)
    }
}

impl From<Timestamp> for ScalarValue {
    fn from(ts: Timestamp) -> Self {
        ts.to_scalar_value()
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        ts.to_value()
    }
}

impl TryFrom<Value> for Timestamp {
    type Error = TimestampScalarConversionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<ScalarValue> for Timestamp {
    type Error = TimestampScalarConversionError;

    fn try_from(scalar: ScalarValue) -> Result<Self, Self::Error> {
        Self::from_scalar_value(scalar)
    }
}

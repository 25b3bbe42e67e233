use core::fmt;

use crate::convert::{mismatch, ScalarValueRepresentable};
use crate::{ScalarValue, Value};

/// The value of a counter register in a CRDT document.
///
/// A `Counter` is a plain snapshot of the register's logical value. Concurrent
/// increments and decrements are merged by the document engine; this type
/// only carries the number in and out of the document.
///
/// The value is stored at platform width and travels as an `i64` in
/// [`ScalarValue::Counter`].
///
/// # Example
///
/// ```
/// use crdt_value::prelude::*;
///
/// let visits = Counter::new(3);
/// assert_eq!(visits.to_scalar_value(), ScalarValue::Counter(3));
///
/// let read = Counter::from_scalar_value(ScalarValue::Counter(3)).unwrap();
/// assert_eq!(read, visits);
/// assert_eq!(read, Counter::from(3i64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    value: isize,
}

impl Counter {
    /// Create a counter holding `value`.
    pub const fn new(value: isize) -> Self {
        Self { value }
    }

    /// Create a counter from a wire-width value, or `None` if it does not fit
    /// in `isize` on this target.
    #[must_use]
    pub fn checked_from_i64(value: i64) -> Option<Self> {
        isize::try_from(value).ok().map(Self::new)
    }

    /// The logical value of the counter.
    #[must_use]
    pub const fn value(&self) -> isize {
        self.value
    }
}

impl From<isize> for Counter {
    fn from(value: isize) -> Self {
        Self::new(value)
    }
}

/// Lossless on 64-bit targets. On narrower targets the value is truncated to
/// `isize`; use [`Counter::checked_from_i64`] to detect that case.
impl From<i64> for Counter {
    fn from(value: i64) -> Self {
        Self::new(value as isize)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A document value could not be read as a [`Counter`].
#[derive(Debug, Clone, PartialEq)]
pub enum CounterScalarConversionError {
    /// The value is not a [`ScalarValue::Counter`].
    NotCounter(Value),
}

impl fmt::Display for CounterScalarConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCounter(val) => write!(
                f,
                "failed to read the scalar value {val} as a signed integer counter"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CounterScalarConversionError {}

impl ScalarValueRepresentable for Counter {
    type ConvertError = CounterScalarConversionError;

    fn from_value(value: Value) -> Result<Self, CounterScalarConversionError> {
        match value {
            Value::Scalar(ScalarValue::Counter(d)) => Ok(Self::from(d)),
            other => {
                mismatch("counter", &other);
                Err(CounterScalarConversionError::NotCounter(other))
            }
        }
    }

    fn to_scalar_value(&self) -> ScalarValue {
        ScalarValue::Counter(self.value as i64)
    }
}

impl From<Counter> for ScalarValue {
    fn from(counter: Counter) -> Self {
        counter.to_scalar_value()
    }
}

impl From<Counter> for Value {
    fn from(counter: Counter) -> Self {
        counter.to_value()
    }
}

impl TryFrom<Value> for Counter {
    type Error = CounterScalarConversionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<ScalarValue> for Counter {
    type Error = CounterScalarConversionError;

    fn try_from(scalar: ScalarValue) -> Result<Self, Self::Error> {
        Self::from_scalar_value(scalar)
    }
}

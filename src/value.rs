//! Tagged values stored in a CRDT document.
//!
//! A document field holds either a reference to a nested object or a
//! [`ScalarValue`]. Both sets of variants are closed: adding a variant forces
//! every [`ScalarValueRepresentable`](crate::ScalarValueRepresentable)
//! implementation to be revisited.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Identifier of an object (map, list or text) inside a document.
///
/// The identifier is opaque: the bytes are assigned by the document engine.
/// An empty identifier denotes the document root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjId(Vec<u8>);

impl ObjId {
    /// The identifier of the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Wrap raw identifier bytes handed out by the document engine.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Raw identifier bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this identifies the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            write_hex(f, &self.0)
        }
    }
}

/// The kind of a nested document object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjType {
    /// String-keyed map.
    Map,
    /// Ordered sequence.
    List,
    /// Collaborative text.
    Text,
}

impl fmt::Display for ObjType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map => f.write_str("map"),
            Self::List => f.write_str("list"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Every primitive value a CRDT document can store.
///
/// `Counter` is distinct from `Int`: the document engine merges counters by
/// summing concurrent increments, while an `Int` is an ordinary register.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarValue {
    /// Raw byte sequence.
    Bytes(Vec<u8>),
    /// UTF-8 string.
    String(String),
    /// Unsigned 64-bit integer.
    Uint(u64),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit IEEE 754 float.
    F64(f64),
    /// Counter register value.
    Counter(i64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// Boolean.
    Boolean(bool),
    /// A value written by a newer engine, preserved as its type code and bytes.
    Unknown {
        /// Type code assigned by the writing engine.
        type_code: u8,
        /// Encoded payload.
        bytes: Vec<u8>,
    },
    /// Explicit null.
    Null,
}

impl ScalarValue {
    /// Whether this is [`ScalarValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => {
                f.write_str("Bytes(")?;
                write_hex(f, bytes)?;
                f.write_str(")")
            }
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Uint(n) => write!(f, "Uint({n})"),
            Self::Int(n) => write!(f, "Int({n})"),
            Self::F64(n) => write!(f, "F64({n})"),
            Self::Counter(n) => write!(f, "Counter({n})"),
            Self::Timestamp(ms) => write!(f, "Timestamp({ms})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Unknown { type_code, bytes } => {
                write!(f, "Unknown({type_code}, ")?;
                write_hex(f, bytes)?;
                f.write_str(")")
            }
            Self::Null => f.write_str("Null"),
        }
    }
}

/// The value held by a single document field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A nested object.
    Object(ObjId, ObjType),
    /// A primitive value.
    Scalar(ScalarValue),
}

impl Value {
    /// Whether this field refers to a nested object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The scalar held by this field, if any.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Object(..) => None,
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(scalar: ScalarValue) -> Self {
        Self::Scalar(scalar)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(id, obj_type) => write!(f, "Object({id}, {obj_type})"),
            Self::Scalar(scalar) => scalar.fmt(f),
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

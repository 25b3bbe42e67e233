//! Convenient re-exports for common usage.
//!
//! ```
//! use crdt_value::prelude::*;
//! ```

pub use crate::Counter;
pub use crate::ObjId;
pub use crate::ObjType;
pub use crate::ScalarValue;
pub use crate::ScalarValueRepresentable;
pub use crate::Timestamp;
pub use crate::Value;

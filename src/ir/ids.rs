//! Newtype identifier for layers.
//!
//! Layer ids come straight from the designer's layer names, so they are
//! strings rather than counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The id of a layer, unique within one canvas.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub String);

impl LayerId {
    /// Creates a new LayerId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({:?})", self.0)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        LayerId::new(id)
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        LayerId(id)
    }
}

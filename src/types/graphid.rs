use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored graph document
///
/// The core does not assign meaning to these beyond using them as keys
/// into the document store; the surrounding application owns allocation
/// and ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(pub u64);

impl GraphId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for GraphId {
    fn from(raw: u64) -> Self {
        GraphId(raw)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

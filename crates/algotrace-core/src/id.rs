//! Step identifier newtype.
//!
//! A [`StepId`] is the position of a step inside one trace. Ids start at 0 for
//! every execution and increase by one per recorded step, so the id of a step
//! is always equal to its index in the returned step list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a step within a single trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u32);

impl StepId {
    /// Returns the id as an index into the step list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

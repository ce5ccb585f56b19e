//! Input validation errors for algorithm execution.
//!
//! Every [`TraceError`] is raised before the first step of a trace is
//! recorded, so a caller never observes a partially populated step list.
//! Messages are written to be shown to a user as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputKind;

/// Coarse classification of a [`TraceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input has the wrong shape: wrong variant, missing field, a
    /// reference to something that does not exist, or undecodable JSON.
    Shape,
    /// The input is well formed but exceeds a size cap or numeric domain.
    Range,
}

/// Errors produced while validating an [`AlgorithmInput`](crate::AlgorithmInput).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum TraceError {
    /// The input variant does not match what the algorithm accepts.
    #[error("{algorithm} expects {expected} input, got {found}")]
    InputMismatch {
        algorithm: String,
        expected: InputKind,
        found: InputKind,
    },

    /// A required field is absent or empty.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// The input references a graph node that does not exist.
    #[error("node '{node}' referenced by {context} does not exist")]
    UnknownNode { node: String, context: String },

    /// The input could not be decoded or is internally inconsistent.
    #[error("malformed input: {reason}")]
    Malformed { reason: String },

    /// No algorithm is registered under the given id.
    #[error("unknown algorithm '{id}'")]
    UnknownAlgorithm { id: String },

    /// A collection is larger than the configured cap.
    #[error("{field} has {len} entries, the maximum is {max}")]
    TooLarge {
        field: String,
        len: usize,
        max: usize,
    },

    /// A numeric argument is outside the supported domain.
    #[error("{field} = {value} is outside the supported range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl TraceError {
    /// Returns whether this is a shape or a range error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TraceError::InputMismatch { .. }
            | TraceError::MissingField { .. }
            | TraceError::UnknownNode { .. }
            | TraceError::Malformed { .. }
            | TraceError::UnknownAlgorithm { .. } => ErrorKind::Shape,
            TraceError::TooLarge { .. } | TraceError::OutOfRange { .. } => ErrorKind::Range,
        }
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(err: serde_json::Error) -> Self {
        TraceError::Malformed {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_classified() {
        let shape = TraceError::UnknownNode {
            node: "9".into(),
            context: "start".into(),
        };
        let range = TraceError::TooLarge {
            field: "values".into(),
            len: 20,
            max: 12,
        };
        assert_eq!(shape.kind(), ErrorKind::Shape);
        assert_eq!(range.kind(), ErrorKind::Range);
    }

    #[test]
    fn messages_are_human_readable() {
        let err = TraceError::OutOfRange {
            field: "a".into(),
            value: -4,
            min: 0,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "a = -4 is outside the supported range 0..=1000"
        );

        let err = TraceError::InputMismatch {
            algorithm: "gcd".into(),
            expected: InputKind::Pair,
            found: InputKind::Array,
        };
        assert_eq!(err.to_string(), "gcd expects pair input, got array");
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: TraceError = serde_json::from_str::<Vec<i64>>("[1, \"x\"]")
            .unwrap_err()
            .into();
        assert!(matches!(err, TraceError::Malformed { .. }));
        assert_eq!(err.kind(), ErrorKind::Shape);
    }
}

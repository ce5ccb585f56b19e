//! The contract every traced algorithm implements.

use serde::Serialize;

use crate::error::TraceError;
use crate::input::{AlgorithmInput, InputKind};
use crate::playback::VisualKind;
use crate::result::AlgorithmResult;

/// Algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Graph,
    Sorting,
    DynamicProgramming,
    Heap,
    NumberTheory,
}

impl Category {
    /// The snapshot rendering a player should use for this family.
    pub fn visual_kind(self) -> VisualKind {
        match self {
            Category::Graph => VisualKind::Graph,
            Category::Sorting | Category::Heap => VisualKind::Array,
            Category::DynamicProgramming => VisualKind::Table,
            Category::NumberTheory => VisualKind::Number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Static metadata, defined once per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    /// The only input variant `execute` accepts.
    pub input: InputKind,
}

impl AlgorithmDescriptor {
    /// Error for an input whose variant this algorithm does not accept.
    pub fn mismatch(&self, found: &AlgorithmInput) -> TraceError {
        TraceError::InputMismatch {
            algorithm: self.id.to_string(),
            expected: self.input,
            found: found.kind(),
        }
    }
}

/// A traced algorithm.
///
/// `execute` validates its input before recording anything, keeps all
/// working state local to the call, and returns the complete trace. One
/// instance can be executed any number of times; runs never share state.
pub trait Algorithm {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// Runs the algorithm to completion and returns its trace.
    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError>;

    /// A canned input that is valid under default limits.
    fn default_input(&self) -> AlgorithmInput;

    /// Prose explanation of how the algorithm works.
    fn explanation(&self) -> &'static str;
}

//! Append-only step recording.
//!
//! [`StepRecorder`] is the one place that assigns step ids and copies state
//! into snapshots. Ids are derived from the list length, so they start at 0
//! and can never skip or repeat. A recorder is created fresh for every
//! execution and consumed when the result is aggregated.

use crate::id::StepId;
use crate::snapshot::{SequenceTable, Snapshot};
use crate::step::{StepDraft, StepRecord};

/// Working state that can produce an owned [`Snapshot`] of itself.
pub trait Capture {
    fn capture(&self) -> Snapshot;
}

impl Capture for [i64] {
    fn capture(&self) -> Snapshot {
        Snapshot::Array(self.to_vec())
    }
}

impl Capture for Vec<i64> {
    fn capture(&self) -> Snapshot {
        self.as_slice().capture()
    }
}

impl Capture for SequenceTable {
    fn capture(&self) -> Snapshot {
        Snapshot::Sequence(self.clone())
    }
}

/// Owns the step list for one execution.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<StepRecord>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Appends a step, snapshotting `state` as it is right now.
    pub fn record<S: Capture + ?Sized>(&mut self, state: &S, draft: StepDraft) -> StepId {
        debug_assert!(
            !draft.description().is_empty(),
            "step descriptions are required"
        );
        let id = StepId(self.steps.len() as u32);
        self.steps
            .push(StepRecord::from_draft(id, state.capture(), draft));
        id
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Read-only view of the steps recorded so far.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Consumes the recorder, yielding the finished trace.
    pub fn finish(self) -> Vec<StepRecord> {
        self.steps
    }
}

//! Binary heap: bottom-up build followed by a sequence of priority-queue
//! operations.
//!
//! The heap lives in a flat array (children of `i` at `2i + 1` and `2i + 2`)
//! and every snapshot is that array. Each comparison and each swap is its own
//! step. Sift-down compares the left child, then the right child, against the
//! current best so it ends up at the child that most violates the heap
//! property; on a tie between children the left one wins.

use std::time::Instant;

use algotrace_core::input::{HeapInput, HeapKind, HeapOperation};
use algotrace_core::limits::ensure_len;
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Capture, Category,
    Difficulty, HeapDetail, InputKind, Limits, OperationTag, Outcome, Snapshot, StepDraft,
    StepRecorder, TraceError,
};

use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "binary-heap",
    name: "Binary Heap",
    category: Category::Heap,
    difficulty: Difficulty::Intermediate,
    time_complexity: "O(n) build, O(log n) per operation",
    space_complexity: "O(n)",
    input: InputKind::Heap,
};

const EXPLANATION: &str = "A binary heap is a complete binary tree stored in an \
array where every parent outranks its children: in a max-heap parents are at least \
as large, in a min-heap at most as large. Building a heap sifts every internal node \
down, starting from the last parent and working back to the root. Inserting appends \
the value at the end and sifts it up while it outranks its parent. Extracting \
removes the root, moves the last element into its place, and sifts it down towards \
whichever child should be above it.";

/// Traced binary heap.
#[derive(Debug, Clone, Default)]
pub struct BinaryHeap {
    limits: Limits,
}

impl BinaryHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        BinaryHeap { limits }
    }

    fn validate(&self, input: &HeapInput) -> Result<(), TraceError> {
        ensure_len("initial", input.initial.len(), self.limits.max_array_len)?;
        ensure_len(
            "operations",
            input.operations.len(),
            self.limits.max_heap_operations,
        )
    }
}

/// Working heap of one run.
struct Heap {
    kind: HeapKind,
    items: Vec<i64>,
}

impl Capture for Heap {
    fn capture(&self) -> Snapshot {
        Snapshot::Array(self.items.clone())
    }
}

impl Heap {
    fn detail(&self, index: usize) -> HeapDetail {
        HeapDetail {
            index: Some(index),
            size: self.items.len(),
            ..Default::default()
        }
    }

    fn sift_up(&mut self, mut index: usize, recorder: &mut StepRecorder) {
        while index > 0 {
            let parent = (index - 1) / 2;
            recorder.record(
                &*self,
                StepDraft::new(
                    OperationTag::Comparison,
                    format!(
                        "Compare {} at position {index} with its parent {} at position {parent}",
                        self.items[index], self.items[parent]
                    ),
                )
                .compare([index, parent])
                .detail(HeapDetail {
                    parent: Some(parent),
                    ..self.detail(index)
                }),
            );

            if !self.kind.outranks(self.items[index], self.items[parent]) {
                recorder.record(
                    &*self,
                    StepDraft::new(
                        OperationTag::NoSwap,
                        format!(
                            "{} does not outrank its parent; the {} property holds",
                            self.items[index], self.kind
                        ),
                    )
                    .highlight([index])
                    .detail(HeapDetail {
                        parent: Some(parent),
                        ..self.detail(index)
                    }),
                );
                return;
            }

            self.items.swap(index, parent);
            recorder.record(
                &*self,
                StepDraft::new(
                    OperationTag::Swap,
                    format!("Swap {} up into position {parent}", self.items[parent]),
                )
                .highlight([index, parent])
                .detail(HeapDetail {
                    parent: Some(parent),
                    ..self.detail(parent)
                }),
            );
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize, recorder: &mut StepRecorder) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= self.items.len() {
                return;
            }

            let mut best = index;
            for child in [left, right] {
                if child >= self.items.len() {
                    break;
                }
                recorder.record(
                    &*self,
                    StepDraft::new(
                        OperationTag::Comparison,
                        format!(
                            "Compare child {} at position {child} with {} at position {best}",
                            self.items[child], self.items[best]
                        ),
                    )
                    .highlight([index])
                    .compare([child, best])
                    .detail(HeapDetail {
                        child: Some(child),
                        ..self.detail(index)
                    }),
                );
                if self.kind.outranks(self.items[child], self.items[best]) {
                    best = child;
                }
            }

            if best == index {
                recorder.record(
                    &*self,
                    StepDraft::new(
                        OperationTag::NoSwap,
                        format!(
                            "{} at position {index} outranks its children; the {} property holds",
                            self.items[index], self.kind
                        ),
                    )
                    .highlight([index])
                    .detail(self.detail(index)),
                );
                return;
            }

            self.items.swap(index, best);
            recorder.record(
                &*self,
                StepDraft::new(
                    OperationTag::Swap,
                    format!("Swap {} down into position {best}", self.items[best]),
                )
                .highlight([index, best])
                .detail(HeapDetail {
                    child: Some(best),
                    ..self.detail(index)
                }),
            );
            index = best;
        }
    }

    fn insert(&mut self, value: i64, recorder: &mut StepRecorder) {
        self.items.push(value);
        let last = self.items.len() - 1;
        recorder.record(
            &*self,
            StepDraft::new(
                OperationTag::Insert,
                format!("Insert {value} at the end of the heap (position {last})"),
            )
            .highlight([last])
            .detail(self.detail(last)),
        );
        self.sift_up(last, recorder);
    }

    fn extract(&mut self, recorder: &mut StepRecorder) -> Option<i64> {
        let Some(last) = self.items.pop() else {
            recorder.record(
                &*self,
                StepDraft::new(OperationTag::Extract, "The heap is empty; nothing to extract")
                    .detail(HeapDetail::default()),
            );
            return None;
        };

        let top = match self.items.first_mut() {
            Some(root) => std::mem::replace(root, last),
            None => last,
        };
        let description = if self.items.is_empty() {
            format!("Extract {top}, the only element")
        } else {
            format!("Extract the root {top} and move the last element {last} to the root")
        };
        recorder.record(
            &*self,
            StepDraft::new(OperationTag::Extract, description)
                .highlight(if self.items.is_empty() { None } else { Some(0usize) })
                .detail(HeapDetail {
                    extracted: Some(top),
                    ..self.detail(0)
                }),
        );
        self.sift_down(0, recorder);
        Some(top)
    }
}

impl Algorithm for BinaryHeap {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Heap(heap_input) = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        self.validate(heap_input)
            .map_err(|e| rejected(&DESCRIPTOR, e))?;

        let mut heap = Heap {
            kind: heap_input.heap,
            items: heap_input.initial.clone(),
        };
        let mut recorder = StepRecorder::new();
        recorder.record(
            &heap,
            StepDraft::new(
                OperationTag::Init,
                format!(
                    "Build a {} from {} value(s), then apply {} operation(s)",
                    heap.kind,
                    heap.items.len(),
                    heap_input.operations.len()
                ),
            )
            .detail(HeapDetail {
                size: heap.items.len(),
                ..Default::default()
            }),
        );

        for index in (0..heap.items.len() / 2).rev() {
            recorder.record(
                &heap,
                StepDraft::new(
                    OperationTag::Heapify,
                    format!(
                        "Heapify the subtree rooted at position {index} (value {})",
                        heap.items[index]
                    ),
                )
                .highlight([index])
                .detail(heap.detail(index)),
            );
            heap.sift_down(index, &mut recorder);
        }

        let mut extracted = Vec::new();
        for operation in &heap_input.operations {
            match *operation {
                HeapOperation::Insert { value } => heap.insert(value, &mut recorder),
                HeapOperation::Extract => extracted.push(heap.extract(&mut recorder)),
            }
        }

        let root = heap
            .items
            .first()
            .map_or_else(|| "empty".to_string(), |v| format!("rooted at {v}"));
        recorder.record(
            &heap,
            StepDraft::new(
                OperationTag::Complete,
                format!(
                    "Done: {} of {} element(s), {root}",
                    heap.kind,
                    heap.items.len()
                ),
            )
            .secondary(0..heap.items.len())
            .detail(HeapDetail {
                size: heap.items.len(),
                ..Default::default()
            }),
        );

        let outcome = Outcome::Heap {
            items: heap.items,
            extracted,
        };
        Ok(complete(&DESCRIPTOR, outcome, recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        AlgorithmInput::Heap(HeapInput {
            heap: HeapKind::Max,
            initial: vec![4, 10, 3, 5, 1],
            operations: vec![HeapOperation::Insert { value: 15 }, HeapOperation::Extract],
        })
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}

pub mod algorithm;
pub mod detail;
pub mod error;
pub mod graph;
pub mod id;
pub mod input;
pub mod limits;
pub mod playback;
pub mod recorder;
pub mod result;
pub mod snapshot;
pub mod step;

// Re-export commonly used types
pub use algorithm::{Algorithm, AlgorithmDescriptor, Category, Difficulty};
pub use detail::{DpDetail, GraphDetail, HeapDetail, NumberDetail, SortDetail, StepDetail};
pub use error::{ErrorKind, TraceError};
pub use id::StepId;
pub use input::{AlgorithmInput, InputKind};
pub use limits::Limits;
pub use playback::{Playback, PlaybackConfig, VisualKind};
pub use recorder::{Capture, StepRecorder};
pub use result::{AlgorithmResult, Outcome, Summary};
pub use snapshot::Snapshot;
pub use step::{Marker, OperationTag, StepDraft, StepRecord};

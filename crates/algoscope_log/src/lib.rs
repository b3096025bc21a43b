//! ALGOSCOPE Step Log
//!
//! The shared step-event vocabulary, the append-only recorder every
//! instrumented algorithm emits through, the immutable log one run produces,
//! and the cursor that addresses replay positions within it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod event;
pub mod log;
pub mod recorder;

pub use cursor::Cursor;
pub use event::{StepEvent, StepKind, StepTarget, StepValue};
pub use log::{LogError, StepLog};
pub use recorder::TraceRecorder;

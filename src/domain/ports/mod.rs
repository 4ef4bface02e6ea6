//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod object_sync;
pub mod step_runtime;

pub use object_sync::{ObjectSync, SyncStatus};
pub use step_runtime::{InputOptions, StepRuntime};

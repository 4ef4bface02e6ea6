//! Domain Layer
//!
//! Pure deploy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeployInputs, InputName)
//! - `ports/` - Interface definitions for infrastructure (ObjectSync, StepRuntime)

pub mod ports;
pub mod value_objects;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `actions/` - GitHub Actions step runtime (inputs, workflow commands, output file)
//! - `sync/` - Object sync implementations (AWS CLI)

pub mod actions;
pub mod sync;

// Re-export for convenience
pub use actions::ActionsRuntime;
pub use sync::AwsCliSync;

//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_s3::presentation::{factory, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let mut use_case = factory::create_deploy_use_case(&cli);
//! let outcome = use_case.execute()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::create_deploy_use_case;

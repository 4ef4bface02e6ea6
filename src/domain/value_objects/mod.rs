//! Value Objects
//!
//! Immutable types with no identity, compared by value.

mod deploy_inputs;

pub use deploy_inputs::{website_url, DeployInputs, InputName, WEBSITE_URL_OUTPUT};

//! Synthetic assignment data for the resource dashboard.

pub mod candidates;
pub mod error;
pub mod generator;

pub use candidates::{PERSON_NAMES, PROJECT_NAMES};
pub use error::{GenerateError, Result};
pub use generator::{GeneratorConfig, generate, generate_to_file, generate_with_rng};

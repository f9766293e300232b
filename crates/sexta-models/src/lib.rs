//! # Sexta Models
//!
//! Domain models for the Sexta user import pipeline.
//!
//! # Modules
//!
//! - [`records`]: source rows and their normalized form
//! - [`outcome`]: per-record results and the batch summary

pub mod outcome;
pub mod records;

// Re-export commonly used types at crate root for convenience
pub use outcome::{FailureStage, ImportOutcome, ImportSummary};
pub use records::{MaritalStatus, NormalizedUser, SourceRecord};

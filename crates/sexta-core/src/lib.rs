//! # Sexta Core
//!
//! Core utilities for the Sexta administrative tools.
//!
//! This crate provides the pure, side-effect-free building blocks used by
//! the user import pipeline:
//!
//! - [`credentials`]: RUT cleaning, temporary password derivation, and
//!   fallback email synthesis
//! - [`names`]: first-name based gender inference over the fixed name sets
//!
//! # Example
//!
//! ```ignore
//! use sexta_core::credentials::{clean_rut, temp_password};
//! use sexta_core::names::{infer_gender, Gender};
//!
//! assert_eq!(clean_rut("8.726.935-3"), "87269353");
//! assert_eq!(temp_password("8726935-3"), "872693532026");
//! assert_eq!(infer_gender("Maria Soto"), Gender::Female);
//! ```

pub mod credentials;
pub mod names;

// Re-export commonly used items at crate root
pub use credentials::{clean_rut, fallback_email, resolve_email, temp_password};
pub use names::{Gender, infer_gender};

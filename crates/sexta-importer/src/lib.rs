//! # Sexta Importer
//!
//! The user import pipeline: reads a semicolon-delimited personnel roster,
//! normalizes each row (gender inference, marital status mapping,
//! credential derivation), provisions an authentication account plus a
//! linked profile row against external services, and accumulates per-row
//! outcomes into a batch summary.
//!
//! The external services are abstracted behind the [`provision`]
//! capability traits so the whole pipeline can be exercised against fakes
//! with no network access.
//!
//! ```ignore
//! use sexta_importer::{pipeline, reader};
//!
//! let rows = reader::read_source_file(&path)?;
//! let reporter = pipeline::run_import(rows, &identity, &profiles).await;
//! println!("{:?}", reporter.summary());
//! ```

pub mod normalizer;
pub mod pipeline;
pub mod provision;
pub mod reader;
pub mod reporter;

pub use normalizer::normalize;
pub use provision::{IdentityProvider, ProfileStore, Provisioner};
pub use reporter::ImportReporter;

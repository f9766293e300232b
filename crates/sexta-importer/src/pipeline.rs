//! Batch orchestration.
//!
//! Strictly sequential: rows are processed one at a time in input order,
//! each with its own normalize-then-provision pass. No error is fatal to
//! the batch; every input row ends up as exactly one outcome and the run
//! always reaches its summary.

use sexta_models::{ImportOutcome, NormalizedUser};
use validator::Validate;

use crate::normalizer::normalize;
use crate::provision::{IdentityProvider, ProfileStore, Provisioner};
use crate::reader::RowParse;
use crate::reporter::ImportReporter;

/// Normalizes every readable row without touching the external services.
///
/// Used by the dry-run/preview path so operators can inspect inferred
/// genders, derived emails, and passwords before anything is persisted.
pub fn preview(rows: &[RowParse]) -> Vec<(usize, Result<NormalizedUser, String>)> {
    rows.iter()
        .map(|(row, parsed)| {
            let normalized = parsed
                .as_ref()
                .map_err(Clone::clone)
                .and_then(|record| match record.validate() {
                    Ok(()) => Ok(normalize(record)),
                    Err(e) => Err(e.to_string()),
                });
            (*row, normalized)
        })
        .collect()
}

/// Runs the full import over already-read rows.
///
/// Structurally invalid rows (parse errors, missing RUT or full name)
/// are counted as failed without reaching the external services; the
/// remaining rows go through [`Provisioner::provision`].
pub async fn run_import(
    rows: Vec<RowParse>,
    identity: &dyn IdentityProvider,
    profiles: &dyn ProfileStore,
) -> ImportReporter {
    let provisioner = Provisioner::new(identity, profiles);
    let mut reporter = ImportReporter::new();

    for (row, parsed) in rows {
        let record = match parsed {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping unreadable row");
                reporter.record(ImportOutcome::failed(row, "", "", None, e));
                continue;
            }
        };

        if let Err(e) = record.validate() {
            tracing::warn!(row, rut = %record.rut, error = %e, "skipping invalid row");
            reporter.record(ImportOutcome::failed(
                row,
                &record.rut,
                &record.full_name,
                None,
                e.to_string(),
            ));
            continue;
        }

        let user = normalize(&record);
        tracing::info!(
            row,
            rut = %user.rut,
            full_name = %user.full_name,
            gender = %user.gender,
            "provisioning user"
        );

        reporter.record(provisioner.provision(row, &user).await);
    }

    reporter
}

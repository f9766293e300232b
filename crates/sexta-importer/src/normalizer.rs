//! Row normalization.
//!
//! Derives the canonical fields (gender, marital status, email, password)
//! from a raw [`SourceRecord`]. Pure and total: never fails, missing
//! optional fields fall back to defaults.

use sexta_core::credentials::{resolve_email, temp_password};
use sexta_core::names::{Gender, infer_gender};
use sexta_models::{MaritalStatus, NormalizedUser, SourceRecord};

/// Normalizes one source row.
///
/// An explicit `M`/`F` value in the optional gender column takes
/// precedence over name-based inference.
pub fn normalize(record: &SourceRecord) -> NormalizedUser {
    let gender = record
        .gender
        .as_deref()
        .and_then(Gender::from_code)
        .unwrap_or_else(|| infer_gender(&record.full_name));

    let email = resolve_email(&record.rut, &record.email);
    let email_from_csv = !record.email.trim().is_empty();

    NormalizedUser {
        rut: record.rut.clone(),
        full_name: record.full_name.clone(),
        victor_number: record.victor_number.clone(),
        registro_compania: if record.registro_compania.is_empty() {
            None
        } else {
            Some(record.registro_compania.clone())
        },
        rank: record.rank.clone(),
        role: record.role.clone(),
        gender,
        marital_status: MaritalStatus::from_label(&record.marital_status),
        email,
        password: temp_password(&record.rut),
        email_from_csv,
    }
}

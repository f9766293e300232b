//! Source rows and their normalized form.

use serde::{Deserialize, Serialize};
use sexta_core::names::Gender;
use validator::Validate;

/// One row of the personnel roster, as read from the semicolon-delimited
/// CSV. Immutable once read; all normalization produces a separate
/// [`NormalizedUser`].
///
/// The `gender` column is optional: when present with a valid `M`/`F`
/// value it overrides the name-based inference, which lets an operator
/// correct a bad guess in the file and re-run.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SourceRecord {
    #[validate(length(min = 1, message = "rut is required"))]
    pub rut: String,
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,
    #[serde(default)]
    pub victor_number: String,
    #[serde(default)]
    pub registro_compania: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub marital_status: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Marital status as stored in the profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Single,
}

impl MaritalStatus {
    /// Maps a free-text source label.
    ///
    /// A label containing the token `casad` (any case, so it covers both
    /// "Casado" and "Casada") means married; everything else, including
    /// unrecognized labels, maps to single.
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().contains("casad") {
            MaritalStatus::Married
        } else {
            MaritalStatus::Single
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "married",
            MaritalStatus::Single => "single",
        }
    }
}

/// A [`SourceRecord`] with all derived fields resolved, ready for
/// provisioning.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedUser {
    /// RUT in its original form, separators included.
    pub rut: String,
    pub full_name: String,
    pub victor_number: String,
    pub registro_compania: Option<String>,
    pub rank: String,
    pub role: String,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    /// Login email: the source email when supplied, else synthesized.
    pub email: String,
    /// Deterministic temporary password (cleaned RUT + fixed suffix).
    pub password: String,
    /// Whether the email came from the source file. The synthesized
    /// fallback is used for authentication but not persisted in the
    /// profile row.
    pub email_from_csv: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marital_status_from_label() {
        assert_eq!(MaritalStatus::from_label("Casado"), MaritalStatus::Married);
        assert_eq!(MaritalStatus::from_label("Casada"), MaritalStatus::Married);
        assert_eq!(MaritalStatus::from_label("CASADO"), MaritalStatus::Married);
        assert_eq!(MaritalStatus::from_label("Soltera"), MaritalStatus::Single);
        assert_eq!(MaritalStatus::from_label("Soltero"), MaritalStatus::Single);
        assert_eq!(MaritalStatus::from_label("Viudo"), MaritalStatus::Single);
        assert_eq!(MaritalStatus::from_label(""), MaritalStatus::Single);
    }

    #[test]
    fn marital_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MaritalStatus::Married).unwrap(),
            "\"married\""
        );
        assert_eq!(
            serde_json::to_string(&MaritalStatus::Single).unwrap(),
            "\"single\""
        );
    }

    #[test]
    fn source_record_requires_rut_and_full_name() {
        let record = SourceRecord {
            rut: String::new(),
            full_name: "Maria Soto".into(),
            victor_number: String::new(),
            registro_compania: String::new(),
            rank: String::new(),
            marital_status: String::new(),
            email: String::new(),
            role: String::new(),
            gender: None,
        };
        assert!(record.validate().is_err());
    }
}

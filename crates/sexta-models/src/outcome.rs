//! Per-record results and the batch summary.

use serde::Serialize;

/// Which provisioning step failed for a record.
///
/// Absent (`None` on [`ImportOutcome::stage`]) for successes and for rows
/// that never reached provisioning (structural errors in the source file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureStage {
    AccountCreation,
    ProfileInsert,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FailureStage::AccountCreation => "account-creation",
            FailureStage::ProfileInsert => "profile-insert",
        })
    }
}

/// Result of processing one source row.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub rut: String,
    pub full_name: String,
    pub success: bool,
    pub stage: Option<FailureStage>,
    pub error: Option<String>,
    /// Whether a compensating delete of the auth account was attempted.
    pub rolled_back: bool,
}

impl ImportOutcome {
    pub fn created(row: usize, rut: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            row,
            rut: rut.into(),
            full_name: full_name.into(),
            success: true,
            stage: None,
            error: None,
            rolled_back: false,
        }
    }

    pub fn failed(
        row: usize,
        rut: impl Into<String>,
        full_name: impl Into<String>,
        stage: Option<FailureStage>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            row,
            rut: rut.into(),
            full_name: full_name.into(),
            success: false,
            stage,
            error: Some(error.into()),
            rolled_back: false,
        }
    }

    /// Marks the outcome as having attempted the compensating delete.
    pub fn with_rollback(mut self) -> Self {
        self.rolled_back = true;
        self
    }
}

/// Aggregated counts for a completed run. Read-only once produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub failed: usize,
    pub total: usize,
}

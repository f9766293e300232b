//! Outcome accumulation and the batch summary.

use sexta_models::{ImportOutcome, ImportSummary};

/// Accumulates per-record outcomes during a run.
///
/// Only ever touched by the single processing task; no side effects
/// beyond the internal list until [`summary`](ImportReporter::summary)
/// is read.
#[derive(Debug, Default)]
pub struct ImportReporter {
    outcomes: Vec<ImportOutcome>,
}

impl ImportReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ImportOutcome) {
        self.outcomes.push(outcome);
    }

    /// All recorded outcomes, in processing order.
    pub fn outcomes(&self) -> &[ImportOutcome] {
        &self.outcomes
    }

    /// Totals for the run so far.
    pub fn summary(&self) -> ImportSummary {
        let created = self.outcomes.iter().filter(|o| o.success).count();
        ImportSummary {
            created,
            failed: self.outcomes.len() - created,
            total: self.outcomes.len(),
        }
    }
}

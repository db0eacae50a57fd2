use crate::types::{ImprovementPoint, Record};

/// Headline numbers for a run, shown under the chart
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub num_records: usize,
    pub last_generation: u64,
    pub final_best: f64,
    pub peak_best: f64,
    /// Rises after the baseline point
    pub improvement_count: usize,
    pub last_improvement_generation: u64,
    /// Generations logged since the last improvement
    pub stagnation: u64,
    pub final_diversity_pct: f64,
}

impl RunSummary {
    /// Returns `None` for an empty run
    pub fn from_run(records: &[Record], improvements: &[ImprovementPoint]) -> Option<Self> {
        let last = records.last()?;
        let last_improvement = improvements.last()?;

        let peak_best = records
            .iter()
            .map(|r| r.best_solution)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            num_records: records.len(),
            last_generation: last.generation,
            final_best: last.best_solution,
            peak_best,
            improvement_count: improvements.len().saturating_sub(1),
            last_improvement_generation: last_improvement.generation,
            stagnation: last.generation.saturating_sub(last_improvement.generation),
            final_diversity_pct: last.diversity_pct(),
        })
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} generations | best {:.4} (peak {:.4}) | {} improvements, last at generation {} ({} since) | diversity {:.1}%",
            self.num_records,
            self.final_best,
            self.peak_best,
            self.improvement_count,
            self.last_improvement_generation,
            self.stagnation,
            self.final_diversity_pct
        )
    }
}

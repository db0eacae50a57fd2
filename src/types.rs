use serde::{Deserialize, Serialize};

/// One row of a run log, typed and in file order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub generation: u64,
    pub best_solution: f64,
    pub worst_solution: f64,
    pub average_score: f64,
    pub diversity: f64, // Ratio in [0, 1]
}

impl Record {
    pub fn new(
        generation: u64,
        best_solution: f64,
        worst_solution: f64,
        average_score: f64,
        diversity: f64,
    ) -> Self {
        Self {
            generation,
            best_solution,
            worst_solution,
            average_score,
            diversity,
        }
    }

    /// Diversity expressed as a percentage for the 0-100 axis
    pub fn diversity_pct(&self) -> f64 {
        self.diversity * 100.0
    }
}

/// A generation where the best score rose above the previous generation's best.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPoint {
    pub generation: u64,
    pub best_solution: f64,
}

impl From<&Record> for ImprovementPoint {
    fn from(record: &Record) -> Self {
        Self {
            generation: record.generation,
            best_solution: record.best_solution,
        }
    }
}

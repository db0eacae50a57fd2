use serde::{Deserialize, Serialize};

/// Columns every run log must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Generation,
    BestSolution,
    WorstSolution,
    AverageScore,
    Diversity,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generation => "generation",
            Self::BestSolution => "best_solution",
            Self::WorstSolution => "worst_solution",
            Self::AverageScore => "average_score",
            Self::Diversity => "diversity",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Generation,
            Self::BestSolution,
            Self::WorstSolution,
            Self::AverageScore,
            Self::Diversity,
        ]
    }
}

/// Metadata about a loaded run log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub extra_columns: Vec<String>,
    pub generation_range: Option<(u64, u64)>, // (first, last) in file order
    pub score_range: Option<(f64, f64)>,      // (min, max) over all score columns
}

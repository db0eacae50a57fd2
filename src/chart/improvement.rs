use crate::error::{ChartError, Result};
use crate::types::{ImprovementPoint, Record};

/// Pick out the generations where the best score went up.
///
/// The first record is always kept as the baseline. Every later record is
/// compared with the record right before it in the log (not with the last
/// point kept), and is kept only when its best score is strictly greater.
pub fn extract(records: &[Record]) -> Result<Vec<ImprovementPoint>> {
    let first = records.first().ok_or(ChartError::EmptyInput)?;

    let mut points = vec![ImprovementPoint::from(first)];
    let mut previous_best = first.best_solution;

    for record in &records[1..] {
        if record.best_solution > previous_best {
            points.push(ImprovementPoint::from(record));
        }
        previous_best = record.best_solution;
    }

    log::debug!(
        "Extracted {} improvement point(s) from {} record(s)",
        points.len(),
        records.len()
    );

    Ok(points)
}

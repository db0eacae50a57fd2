use crate::error::{ChartError, Result};
use crate::types::Record;
use polars::prelude::*;
use super::types::RequiredColumn;

pub struct DataValidator;

impl DataValidator {
    /// Validate that the DataFrame carries every run-log column.
    /// Column names must match exactly; order and extra columns don't matter.
    pub fn validate_columns(df: &DataFrame) -> Result<()> {
        let columns = df.get_column_names();
        let missing: Vec<&str> = RequiredColumn::all()
            .iter()
            .map(|required| required.as_str())
            .filter(|name| !columns.iter().any(|col| col.as_str() == *name))
            .collect();

        if !missing.is_empty() {
            return Err(ChartError::MalformedInput(format!(
                "Missing required column(s): {} (found: {:?})",
                missing.join(", "),
                columns.iter().map(|c| c.as_str()).collect::<Vec<_>>()
            )));
        }

        // Generations are whole numbers; a float column means the log is wrong
        let generation = df.column(RequiredColumn::Generation.as_str())?;
        if generation.dtype().is_float() {
            return Err(ChartError::MalformedInput(format!(
                "Column 'generation' must contain whole numbers, found {:?}",
                generation.dtype()
            )));
        }

        Ok(())
    }

    /// Check for null values in the run-log columns
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for required in RequiredColumn::all() {
            let series = df.column(required.as_str())?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((required.as_str().to_string(), null_count));
            }
        }

        Ok(null_report)
    }

    /// Soft checks on decoded records. The log is trusted as written, so these only warn.
    pub fn check_records(records: &[Record]) -> Vec<String> {
        let mut warnings = Vec::new();

        for (i, pair) in records.windows(2).enumerate() {
            if pair[1].generation <= pair[0].generation {
                warnings.push(format!(
                    "Generation does not increase at data row {}: {} follows {}",
                    i + 2,
                    pair[1].generation,
                    pair[0].generation
                ));
            }
        }

        for (i, record) in records.iter().enumerate() {
            if !(0.0..=1.0).contains(&record.diversity) {
                warnings.push(format!(
                    "Diversity {} at data row {} is outside [0, 1]",
                    record.diversity,
                    i + 1
                ));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_validate_good_data() {
        let df = df! {
            "generation" => &[0i64, 1, 2],
            "best_solution" => &[10.0, 12.0, 15.0],
            "worst_solution" => &[1.0, 2.0, 2.5],
            "average_score" => &[5.0, 6.0, 7.0],
            "diversity" => &[0.9, 0.8, 0.7],
        }
        .unwrap();

        assert!(DataValidator::validate_columns(&df).is_ok());
    }

    #[test]
    fn test_validate_missing_column() {
        let df = df! {
            "generation" => &[0i64, 1],
            "best_solution" => &[10.0, 12.0],
            "worst_solution" => &[1.0, 2.0],
            "average_score" => &[5.0, 6.0],
            // Missing 'diversity'
        }
        .unwrap();

        let err = DataValidator::validate_columns(&df).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(ref msg) if msg.contains("diversity")));
    }

    #[test]
    fn test_column_names_are_exact() {
        let df = df! {
            "Generation" => &[0i64, 1],
            "best_solution" => &[10.0, 12.0],
            "worst_solution" => &[1.0, 2.0],
            "average_score" => &[5.0, 6.0],
            "diversity" => &[0.5, 0.4],
        }
        .unwrap();

        assert!(DataValidator::validate_columns(&df).is_err());
    }

    #[test]
    fn test_float_generation_rejected() {
        let df = df! {
            "generation" => &[0.5, 1.5],
            "best_solution" => &[10.0, 12.0],
            "worst_solution" => &[1.0, 2.0],
            "average_score" => &[5.0, 6.0],
            "diversity" => &[0.5, 0.4],
        }
        .unwrap();

        assert!(DataValidator::validate_columns(&df).is_err());
    }

    #[test]
    fn test_check_records_warns_without_failing() {
        let records = vec![
            Record::new(0, 1.0, 1.0, 1.0, 0.5),
            Record::new(0, 2.0, 1.0, 1.5, 1.2),
        ];

        let warnings = DataValidator::check_records(&records);
        assert_eq!(warnings.len(), 2);
    }
}

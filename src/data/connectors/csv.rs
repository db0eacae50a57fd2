use crate::error::{ChartError, Result};
use crate::types::Record;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use super::{
    types::{DatasetMetadata, RequiredColumn},
    validator::DataValidator,
};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame.
    /// The file handle is moved into the reader and dropped when parsing ends, on success or failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ChartError::FileNotFound { path: path.to_path_buf() });
        }

        let file = File::open(path)
            .map_err(|_| ChartError::FileNotFound { path: path.to_path_buf() })?;

        // Whole-number cells parse as integers; scan every row so a late fractional cell widens the column
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| ChartError::MalformedInput(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load, validate and decode a run log into records in file order
    pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        let df = Self::load(&path)?;

        let records = Self::records_from_frame(&df)?;

        if log::log_enabled!(log::Level::Debug) {
            let metadata = Self::create_metadata(&path, &df, &records);
            log::debug!("Loaded run log: {:?}", metadata);
        }

        // Warn about odd rows but don't fail
        for warning in DataValidator::check_records(&records) {
            log::warn!("{}", warning);
        }

        Ok(records)
    }

    /// Decode an in-memory frame. Every cell is coerced strictly; nulls are rejected.
    pub fn records_from_frame(df: &DataFrame) -> Result<Vec<Record>> {
        DataValidator::validate_columns(df)?;

        let null_report = DataValidator::check_nulls(df)?;
        if let Some((column, count)) = null_report.first() {
            return Err(ChartError::MalformedInput(format!(
                "Column '{}' has {} empty cell(s)",
                column, count
            )));
        }

        let generation = Self::strict_column(df, RequiredColumn::Generation, &DataType::UInt64)?;
        let generation = generation.u64()?;

        let best = Self::strict_column(df, RequiredColumn::BestSolution, &DataType::Float64)?;
        let worst = Self::strict_column(df, RequiredColumn::WorstSolution, &DataType::Float64)?;
        let average = Self::strict_column(df, RequiredColumn::AverageScore, &DataType::Float64)?;
        let diversity = Self::strict_column(df, RequiredColumn::Diversity, &DataType::Float64)?;
        let (best, worst, average, diversity) =
            (best.f64()?, worst.f64()?, average.f64()?, diversity.f64()?);

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            match (
                generation.get(i),
                best.get(i),
                worst.get(i),
                average.get(i),
                diversity.get(i),
            ) {
                (Some(g), Some(b), Some(w), Some(a), Some(d)) => {
                    records.push(Record::new(g, b, w, a, d));
                }
                _ => {
                    return Err(ChartError::MalformedInput(format!(
                        "Data row {} has an empty cell",
                        i + 1
                    )));
                }
            }
        }

        Ok(records)
    }

    /// Create metadata for a loaded run log
    pub fn create_metadata<P: AsRef<Path>>(
        path: P,
        df: &DataFrame,
        records: &[Record],
    ) -> DatasetMetadata {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        let required: Vec<&str> = RequiredColumn::all().iter().map(|c| c.as_str()).collect();
        let extra_columns = columns
            .iter()
            .filter(|c| !required.contains(&c.as_str()))
            .cloned()
            .collect();

        let generation_range = match (records.first(), records.last()) {
            (Some(first), Some(last)) => Some((first.generation, last.generation)),
            _ => None,
        };

        let score_range = records
            .iter()
            .flat_map(|r| [r.best_solution, r.worst_solution, r.average_score])
            .fold(None, |range: Option<(f64, f64)>, v| match range {
                Some((min, max)) => Some((min.min(v), max.max(v))),
                None => Some((v, v)),
            });

        DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            extra_columns,
            generation_range,
            score_range,
        }
    }

    fn strict_column(df: &DataFrame, required: RequiredColumn, dtype: &DataType) -> Result<Column> {
        df.column(required.as_str())?
            .strict_cast(dtype)
            .map_err(|e| {
                ChartError::MalformedInput(format!(
                    "Column '{}' cannot be read as {:?}: {}",
                    required.as_str(),
                    dtype,
                    e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_records_from_frame() {
        let df = df! {
            "generation" => &[0i64, 1, 2],
            "best_solution" => &[10.0, 10.0, 15.0],
            "worst_solution" => &[5.0, 4.0, 4.0],
            "average_score" => &[7.0, 6.0, 9.0],
            "diversity" => &[0.5, 0.4, 0.6],
        }
        .unwrap();

        let records = CsvConnector::records_from_frame(&df).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::new(2, 15.0, 4.0, 9.0, 0.6));
    }

    #[test]
    fn test_load_reordered_columns_with_extras() {
        let file = write_csv(
            "diversity,run,average_score,generation,worst_solution,best_solution\n\
             0.5,a,7,0,5,10\n\
             0.4,a,6,1,4,10\n",
        );

        let records = CsvConnector::load_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(0, 10.0, 5.0, 7.0, 0.5),
                Record::new(1, 10.0, 4.0, 6.0, 0.4),
            ]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let err = CsvConnector::load_records(&path).unwrap_err();
        assert!(matches!(err, ChartError::FileNotFound { path: ref p } if *p == path));
    }

    #[test]
    fn test_load_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = CsvConnector::load_records(dir.path()).unwrap_err();
        assert!(matches!(err, ChartError::FileNotFound { .. }));
    }

    #[test]
    fn test_non_numeric_cell() {
        let file = write_csv(
            "generation,best_solution,worst_solution,average_score,diversity\n\
             0,10,5,7,0.5\n\
             1,lots,4,6,0.4\n",
        );

        let err = CsvConnector::load_records(file.path()).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(_)));
    }

    #[test]
    fn test_empty_cell() {
        let file = write_csv(
            "generation,best_solution,worst_solution,average_score,diversity\n\
             0,10,5,7,0.5\n\
             1,12,,6,0.4\n",
        );

        let err = CsvConnector::load_records(file.path()).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(ref msg) if msg.contains("worst_solution")));
    }

    #[test]
    fn test_negative_generation() {
        let file = write_csv(
            "generation,best_solution,worst_solution,average_score,diversity\n\
             -1,10,5,7,0.5\n",
        );

        let err = CsvConnector::load_records(file.path()).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(_)));
    }

    #[test]
    fn test_fractional_cells_after_long_whole_number_prefix() {
        let mut contents =
            String::from("generation,best_solution,worst_solution,average_score,diversity\n");
        for generation in 0..120 {
            contents.push_str(&format!("{},{},1,{},1\n", generation, generation + 10, generation / 2 + 1));
        }
        contents.push_str("120,130.5,1.25,65.5,0.75\n");
        let file = write_csv(&contents);

        let records = CsvConnector::load_records(file.path()).unwrap();
        assert_eq!(records.len(), 121);
        assert_eq!(records[0], Record::new(0, 10.0, 1.0, 1.0, 1.0));
        assert_eq!(records[120], Record::new(120, 130.5, 1.25, 65.5, 0.75));
    }

    #[test]
    fn test_non_numeric_cell_after_long_prefix() {
        let mut contents =
            String::from("generation,best_solution,worst_solution,average_score,diversity\n");
        for generation in 0..110 {
            contents.push_str(&format!("{},10,1,5,0.5\n", generation));
        }
        contents.push_str("110,oops,1,5,0.5\n");
        let file = write_csv(&contents);

        let err = CsvConnector::load_records(file.path()).unwrap_err();
        assert!(matches!(err, ChartError::MalformedInput(_)));
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let file = write_csv("generation,best_solution,worst_solution,average_score,diversity\n");

        let records = CsvConnector::load_records(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_create_metadata() {
        let df = df! {
            "generation" => &[3i64, 4],
            "best_solution" => &[10.0, 12.0],
            "worst_solution" => &[1.0, 2.0],
            "average_score" => &[5.0, 6.0],
            "diversity" => &[0.5, 0.4],
            "seed" => &[7i64, 7],
        }
        .unwrap();
        let records = CsvConnector::records_from_frame(&df).unwrap();

        let metadata = CsvConnector::create_metadata("run.csv", &df, &records);
        assert_eq!(metadata.num_rows, 2);
        assert_eq!(metadata.extra_columns, vec!["seed".to_string()]);
        assert_eq!(metadata.generation_range, Some((3, 4)));
        assert_eq!(metadata.score_range, Some((1.0, 12.0)));
    }
}

use std::{collections::HashMap, fs::File, io::BufReader, io::Read, path::Path};

use thiserror::Error;

pub mod schema;

pub use schema::{Channel, ChannelGroup, ReactionWheel};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("trace has no column named '{0}'")]
    MissingColumn(String),
    #[error("non-numeric value '{value}' in column '{column}' at line {line}")]
    NonNumeric {
        column: String,
        value: String,
        line: u64,
    },
    #[error("trace contains no samples")]
    Empty,
}

/// The recorded output of a simulation run, one row per timestep.
///
/// All columns are f64 samples of equal length; `Time` aligns with every
/// other column by row index.
#[derive(Debug, Clone)]
pub struct SimulationTrace {
    columns: Vec<String>,
    data: HashMap<String, Vec<f64>>,
}

impl SimulationTrace {
    pub fn from_path(path: &Path) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a trace from any CSV source with a header row.
    ///
    /// The CSV reader rejects ragged rows, so all columns come back with a
    /// uniform sample count.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TraceError> {
        let mut csv = csv::Reader::from_reader(reader);
        let columns: Vec<String> = csv
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();
        let mut data: HashMap<String, Vec<f64>> = columns
            .iter()
            .map(|column| (column.clone(), Vec::new()))
            .collect();

        for record in csv.records() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(0);
            for (column, field) in columns.iter().zip(record.iter()) {
                let value: f64 = field
                    .trim()
                    .parse()
                    .map_err(|_| TraceError::NonNumeric {
                        column: column.clone(),
                        value: field.to_string(),
                        line,
                    })?;
                if let Some(samples) = data.get_mut(column) {
                    samples.push(value);
                }
            }
        }

        let trace = Self { columns, data };
        if trace.len() == 0 {
            return Err(TraceError::Empty);
        }
        Ok(trace)
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&[f64], TraceError> {
        self.data
            .get(name)
            .map(|samples| samples.as_slice())
            .ok_or_else(|| TraceError::MissingColumn(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Number of recorded timesteps.
    pub fn len(&self) -> usize {
        self.columns
            .first()
            .and_then(|column| self.data.get(column))
            .map(|samples| samples.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

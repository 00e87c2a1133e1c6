// File: crates/coverage-plot/src/loader.rs
// Summary: Fixed-layout coverage CSV loader (device count, coverage fraction).

use std::path::Path;

use thiserror::Error;

/// Parallel device-count / coverage-fraction columns in file row order.
/// Rows are assumed ascending by device count; this is not verified.
#[derive(Clone, Debug, Default)]
pub struct CoverageLog {
    pub devices: Vec<i64>,
    pub fraction: Vec<f64>,
}

impl CoverageLog {
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// (x, y) pairs for charting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.devices
            .iter()
            .zip(&self.fraction)
            .map(|(&d, &f)| (d as f64, f))
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}:{line}: expected at least two columns")]
    MissingColumn { path: String, line: u64 },
    #[error("{path}:{line}: device count {value:?} is not an integer")]
    ParseDevices { path: String, line: u64, value: String },
    #[error("{path}:{line}: coverage fraction {value:?} is not a number")]
    ParseFraction { path: String, line: u64, value: String },
}

/// Read one coverage log: the header row is consumed and discarded (never
/// validated), column 0 parses as the device count, column 1 as the coverage
/// fraction, and any further columns are ignored. Fails on the first
/// malformed row; a header-only file yields an empty log.
pub fn load_coverage_csv(path: &Path) -> Result<CoverageLog, LoadError> {
    let display = path.display().to_string();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open { path: display.clone(), source })?;

    let mut out = CoverageLog::default();
    for result in rdr.records() {
        let record = result.map_err(|source| LoadError::Read { path: display.clone(), source })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let devices = record
            .get(0)
            .ok_or_else(|| LoadError::MissingColumn { path: display.clone(), line })?;
        let fraction = record
            .get(1)
            .ok_or_else(|| LoadError::MissingColumn { path: display.clone(), line })?;

        let devices: i64 = devices.parse().map_err(|_| LoadError::ParseDevices {
            path: display.clone(),
            line,
            value: devices.to_string(),
        })?;
        let fraction: f64 = fraction.parse().map_err(|_| LoadError::ParseFraction {
            path: display.clone(),
            line,
            value: fraction.to_string(),
        })?;

        out.devices.push(devices);
        out.fraction.push(fraction);
    }
    Ok(out)
}

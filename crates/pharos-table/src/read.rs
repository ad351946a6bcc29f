//! Parameter table loading.
//!
//! The input is a CSV whose header row names the parameters and whose
//! columns list each parameter's domain. Columns may have differing
//! lengths; only non-empty cells contribute values. Column order becomes
//! parameter order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pharos_ir::types::Parameter;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to open parameter table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed parameter table: {0}")]
    Csv(#[from] csv::Error),
}

/// Read parameters from CSV columns.
///
/// Rows may be ragged; a short row simply contributes no value to the
/// trailing columns. Domain validation (empty domains, duplicates) is the
/// core's job, not the loader's.
pub fn read_parameters<R: Read>(input: R) -> Result<Vec<Parameter>, ReadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (idx, cell) in record.iter().enumerate() {
            if idx < columns.len() && !cell.is_empty() {
                columns[idx].push(cell.to_string());
            }
        }
    }

    Ok(headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Parameter {
            name: name.to_string(),
            values,
        })
        .collect())
}

pub fn read_parameters_from_path(path: &Path) -> Result<Vec<Parameter>, ReadError> {
    read_parameters(File::open(path)?)
}

//! Suite serialization.
//!
//! One row per test case, preceded by a header row of parameter names in
//! their original order. Values are emitted in header order, so reordering
//! parameters reorders columns.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pharos_ir::types::Parameter;
use pharos_pairwise::TestCase;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write suite: {0}")]
    Csv(#[from] csv::Error),

    #[error("case {index} has no value for parameter '{parameter}'")]
    MissingAssignment { index: usize, parameter: String },
}

/// Write the suite as CSV rows under a header of parameter names.
///
/// Generator output is always total; `MissingAssignment` only fires for
/// hand-built cases.
pub fn write_suite<W: Write>(
    output: W,
    parameters: &[Parameter],
    suite: &[TestCase],
) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(parameters.iter().map(|p| p.name.as_str()))?;

    for (index, case) in suite.iter().enumerate() {
        let mut row = Vec::with_capacity(parameters.len());
        for param in parameters {
            let value =
                case.value_of(&param.name)
                    .ok_or_else(|| WriteError::MissingAssignment {
                        index,
                        parameter: param.name.clone(),
                    })?;
            row.push(value);
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_suite_to_path(
    path: &Path,
    parameters: &[Parameter],
    suite: &[TestCase],
) -> Result<(), WriteError> {
    write_suite(File::create(path)?, parameters, suite)
}

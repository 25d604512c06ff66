//! CSV parameter table.
//!
//! One row per joint, base to tip:
//!
//! ```text
//! Joint,Type,a,α,d,θ
//! 1,revolute,1,0,0,0
//! 2,prismatic,0,0,0.3,0
//! ```
//!
//! The `Joint` column is the 1-based position in the chain.

use std::io;

use dhviz_core::{Chain, ChainError, JointField, JointKind, JointParameter};
use tracing::debug;

use crate::error::ExportError;

/// Column names of the parameter table.
pub const CSV_HEADER: [&str; 6] = ["Joint", "Type", "a", "α", "d", "θ"];

/// Numeric columns in table order.
const VALUE_COLUMNS: [(usize, JointField); 4] = [
    (2, JointField::A),
    (3, JointField::Alpha),
    (4, JointField::D),
    (5, JointField::Theta),
];

/// Write `chain` as a CSV table to `writer`.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written and
/// [`ExportError::Io`] if the final flush fails.
pub fn write_csv<W: io::Write>(chain: &Chain, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for (i, joint) in chain.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            joint.kind.as_str().to_string(),
            joint.a.to_string(),
            joint.alpha.to_string(),
            joint.d.to_string(),
            joint.theta.to_string(),
        ])?;
    }
    wtr.flush()?;
    debug!(joints = chain.len(), "wrote CSV table");
    Ok(())
}

/// Render `chain` as a CSV string.
///
/// # Errors
///
/// See [`write_csv`].
pub fn chain_to_csv(chain: &Chain) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(chain, &mut buf)?;
    String::from_utf8(buf).map_err(|_| ExportError::InvalidUtf8)
}

/// Read a chain from a CSV table produced by [`write_csv`].
///
/// Surrounding whitespace in fields is ignored and the type column is
/// case-insensitive.
///
/// # Errors
///
/// - [`ExportError::InvalidRow`] for a wrong header, an out-of-order `Joint`
///   column or an unparsable number (row 0 is the header).
/// - [`ExportError::Chain`] for an unknown joint type or a non-finite value.
/// - [`ExportError::Csv`] for malformed CSV, including rows of the wrong width.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Chain, ExportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if !headers.iter().eq(CSV_HEADER) {
        return Err(ExportError::InvalidRow {
            row: 0,
            message: format!(
                "expected header `{}`, found `{}`",
                CSV_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut chain = Chain::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let position: usize = record[0].parse().map_err(|e| ExportError::InvalidRow {
            row,
            message: format!("Joint `{}`: {e}", &record[0]),
        })?;
        if position != row {
            return Err(ExportError::InvalidRow {
                row,
                message: format!("expected joint {row}, found {position}"),
            });
        }

        let kind: JointKind = record[1].parse()?;
        let mut joint = JointParameter::new(kind, 0.0, 0.0, 0.0, 0.0);
        for (col, field) in VALUE_COLUMNS {
            let value: f64 = record[col].parse().map_err(|e| ExportError::InvalidRow {
                row,
                message: format!("{} `{}`: {e}", CSV_HEADER[col], &record[col]),
            })?;
            if !value.is_finite() {
                return Err(ChainError::NonFinite { field, value }.into());
            }
            joint.set(field, value);
        }
        chain.push(joint);
    }

    debug!(joints = chain.len(), "read CSV table");
    Ok(chain)
}

/// Parse a CSV string. See [`read_csv`].
///
/// # Errors
///
/// See [`read_csv`].
pub fn chain_from_csv(text: &str) -> Result<Chain, ExportError> {
    read_csv(text.as_bytes())
}

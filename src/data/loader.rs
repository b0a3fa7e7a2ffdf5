use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use log::debug;

use super::model::{DataTable, Series};
use crate::error::{PlotError, Result};
use crate::figure::SeriesSpec;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one `;`-delimited numeric table, fully into memory.
///
/// Rows are newline-separated; fields may carry surrounding whitespace (the
/// solver writes `"12 ; 3.4e-2"`), so every field is trimmed before parsing.
/// Completely empty lines are ignored. Fails with
/// [`PlotError::FileNotFound`] when `path` does not exist, and with
/// [`PlotError::DataFormat`] when the content is not a rectangular numeric
/// table with at least one row.
pub fn load_table(path: &Path) -> Result<DataTable> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| csv_error(path, e))?;

        let mut row = Vec::with_capacity(record.len());
        for (field_no, token) in record.iter().enumerate() {
            let value: f64 = token.parse().map_err(|_| PlotError::DataFormat {
                path: path.to_path_buf(),
                detail: format!(
                    "row {}, field {}: '{token}' is not a number",
                    row_no + 1,
                    field_no + 1
                ),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(PlotError::DataFormat {
            path: path.to_path_buf(),
            detail: "empty table (no data rows)".to_string(),
        });
    }

    debug!(
        "loaded {} row(s) x {} col(s) from {}",
        rows.len(),
        rows[0].len(),
        path.display()
    );
    Ok(DataTable::new(rows))
}

/// Resolve every [`SeriesSpec`] into a [`Series`], parsing each distinct
/// file once. Series come back in declaration order, which is also the
/// legend order.
pub fn load_series(specs: &[SeriesSpec]) -> Result<Vec<Series>> {
    let mut tables: BTreeMap<PathBuf, DataTable> = BTreeMap::new();
    let mut series = Vec::with_capacity(specs.len());

    for spec in specs {
        if !tables.contains_key(&spec.file) {
            tables.insert(spec.file.clone(), load_table(&spec.file)?);
        }
        let table = &tables[&spec.file];

        let x = table
            .column(spec.x_col)
            .ok_or_else(|| column_error(spec, table, spec.x_col))?;
        let y = table
            .column(spec.y_col)
            .ok_or_else(|| column_error(spec, table, spec.y_col))?;

        series.push(Series {
            label: spec.label.clone(),
            x,
            y,
        });
    }
    Ok(series)
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn open_error(path: &Path, e: io::Error) -> PlotError {
    if e.kind() == io::ErrorKind::NotFound {
        PlotError::FileNotFound(path.to_path_buf())
    } else {
        PlotError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn csv_error(path: &Path, e: csv::Error) -> PlotError {
    // The reader reports ragged rows (and mid-read I/O failures) through the
    // same error type; keep genuine I/O failures in the Io variant.
    let detail = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => PlotError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => PlotError::DataFormat {
            path: path.to_path_buf(),
            detail,
        },
    }
}

fn column_error(spec: &SeriesSpec, table: &DataTable, idx: usize) -> PlotError {
    PlotError::DataFormat {
        path: spec.file.clone(),
        detail: format!(
            "series '{}' references column {idx} but rows have {} field(s)",
            spec.label,
            table.n_cols()
        ),
    }
}

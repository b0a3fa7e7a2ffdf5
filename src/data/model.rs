// ---------------------------------------------------------------------------
// DataTable – one parsed input file
// ---------------------------------------------------------------------------

/// A rectangular numeric table parsed from one delimited text file.
///
/// Invariant (enforced by the loader): every row has the same number of
/// fields and there is at least one row.
#[derive(Debug, Clone)]
pub struct DataTable {
    rows: Vec<Vec<f64>>,
}

impl DataTable {
    pub(crate) fn new(rows: Vec<Vec<f64>>) -> Self {
        DataTable { rows }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of fields per row.
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Copy of one column, or `None` when `idx` is beyond the row width.
    pub fn column(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.n_cols() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}

// ---------------------------------------------------------------------------
// Series – one plotted line
// ---------------------------------------------------------------------------

/// A single plotted line: a legend label and paired x/y values.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Independent values (iteration count or mesh size).
    pub x: Vec<f64>,
    /// Dependent values (error or iteration count), same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    /// Paired (x, y) points in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

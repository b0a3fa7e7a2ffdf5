use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while loading convergence data or rendering a figure
#[derive(Debug, Error)]
pub enum PlotError {
    /// An input file does not exist
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A file is not a rectangular numeric table, or a referenced column
    /// index exceeds the row width
    #[error("{}: {detail}", .path.display())]
    DataFormat { path: PathBuf, detail: String },

    /// Any other I/O failure on an input file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Drawing-backend failure, including an unwritable output path
    #[error("rendering failed: {0}")]
    Render(String),
}

/// Type alias for Results using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;

// The drawing error type is generic over the backend; carry it as a message.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Render(e.to_string())
    }
}

//! Renders FEM solver convergence data as PNG line charts.
//!
//! The input is a set of `;`-delimited text files written by the solver:
//! iteration count against H1 error for several mesh sizes, and mesh size
//! against the iteration count needed to converge. Each [`figure::Figure`]
//! pairs a [`figure::PlotSpec`] with an output path; the four stock figures
//! live in [`figure`] and are rasterized by [`render_convergence_plot`].

pub mod color;
pub mod data;
pub mod error;
pub mod figure;
pub mod render;

pub use error::{PlotError, Result};
pub use figure::{Figure, LineStyle, PlotSpec, SeriesSpec, YScale};
pub use render::render_convergence_plot;

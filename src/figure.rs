use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render;

// ---------------------------------------------------------------------------
// Plot description
// ---------------------------------------------------------------------------

/// One curve: which file, which columns, which legend label.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub file: PathBuf,
    pub x_col: usize,
    pub y_col: usize,
    pub label: String,
}

/// Vertical axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YScale {
    Linear,
    Log,
}

/// How series lines are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Everything needed to draw one chart, independent of the output path.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    /// Curves in declaration order; the legend follows this order.
    pub series: Vec<SeriesSpec>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: YScale,
    pub line_style: LineStyle,
    /// Draw a circle marker at every data point.
    pub markers: bool,
    /// Figure size in inches, matplotlib-style.
    pub size_in: (f64, f64),
    pub dpi: u32,
}

impl PlotSpec {
    /// Output raster size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.size_in.0 * self.dpi as f64).round() as u32,
            (self.size_in.1 * self.dpi as f64).round() as u32,
        )
    }
}

/// A plot spec bound to its output path.
#[derive(Debug, Clone)]
pub struct Figure {
    pub spec: PlotSpec,
    pub output: PathBuf,
}

impl Figure {
    /// Render this figure to its output path.
    pub fn render(&self) -> Result<()> {
        render::render_convergence_plot(&self.spec, &self.output)
    }
}

// ---------------------------------------------------------------------------
// The four stock figures
// ---------------------------------------------------------------------------

/// Mesh sizes of the unpreconditioned solver runs.
pub const H_VALUES: [f64; 4] = [0.025, 0.01, 0.005, 0.0025];

/// Mesh sizes of the Schwarz-preconditioned runs.
pub const PRECOND_H_VALUES: [f64; 3] = [0.025, 0.01, 0.005];

const SIZE_IN: (f64, f64) = (7.0, 5.0);
const DPI: u32 = 300;

/// H1 error against iteration count, one curve per mesh size.
pub fn err_h1(data_dir: &Path) -> Figure {
    let series = H_VALUES
        .iter()
        .map(|h| SeriesSpec {
            file: data_dir.join(format!("errH1_{h}.dat")),
            x_col: 0,
            y_col: 1,
            label: format!("h = {h}"),
        })
        .collect();
    Figure {
        spec: PlotSpec {
            series,
            title: "Convergence de l'erreur H1 pour différentes valeurs de h".to_string(),
            x_label: "Nombre d'itérations".to_string(),
            y_label: "Erreur relative H1".to_string(),
            y_scale: YScale::Log,
            line_style: LineStyle::Dashed,
            markers: false,
            size_in: SIZE_IN,
            dpi: DPI,
        },
        output: PathBuf::from("errH1.png"),
    }
}

/// Iterations to convergence against mesh size, with and without
/// preconditioning.
pub fn iterations(data_dir: &Path) -> Figure {
    Figure {
        spec: PlotSpec {
            series: vec![
                SeriesSpec {
                    file: data_dir.join("iter.dat"),
                    x_col: 0,
                    y_col: 1,
                    label: "Sans préconditionneur".to_string(),
                },
                SeriesSpec {
                    file: data_dir.join("iter_precond.dat"),
                    x_col: 0,
                    y_col: 1,
                    label: "Avec préconditionneur".to_string(),
                },
            ],
            title: "Convergence du gradient conjugué selon le pas de maillage".to_string(),
            x_label: "Pas du maillage h".to_string(),
            y_label: "Nombre d'itérations pour une erreur H1 < 10e-6".to_string(),
            y_scale: YScale::Linear,
            line_style: LineStyle::Solid,
            markers: true,
            size_in: SIZE_IN,
            dpi: DPI,
        },
        output: PathBuf::from("iterations.png"),
    }
}

/// H1 error against iteration count for the Schwarz-preconditioned runs.
pub fn err_h1_precond_schwarz(data_dir: &Path) -> Figure {
    let series = PRECOND_H_VALUES
        .iter()
        .map(|h| SeriesSpec {
            file: data_dir.join(format!("errH1precond_{h}.dat")),
            x_col: 0,
            y_col: 1,
            label: format!("h = {h}"),
        })
        .collect();
    Figure {
        spec: PlotSpec {
            series,
            title: "Convergence de l'erreur H1 avec préconditionnement pour différentes valeurs de h"
                .to_string(),
            x_label: "Nombre d'itérations".to_string(),
            y_label: "Erreur relative H1".to_string(),
            y_scale: YScale::Log,
            line_style: LineStyle::Dashed,
            markers: false,
            size_in: SIZE_IN,
            dpi: DPI,
        },
        output: PathBuf::from("errH1precond_schwarz.png"),
    }
}

/// Iterations of the preconditioned solver against mesh size.
pub fn iterations_precond(data_dir: &Path) -> Figure {
    Figure {
        spec: PlotSpec {
            series: vec![SeriesSpec {
                file: data_dir.join("iter_precond.dat"),
                x_col: 0,
                y_col: 1,
                label: "Nombre d'itérations".to_string(),
            }],
            title: "Convergence du gradient conjugué préconditionné selon le pas de maillage"
                .to_string(),
            x_label: "Pas du maillage h".to_string(),
            y_label: "Nombre d'itérations pour une erreur H1 < 10e-6".to_string(),
            y_scale: YScale::Linear,
            line_style: LineStyle::Solid,
            markers: true,
            size_in: SIZE_IN,
            dpi: DPI,
        },
        output: PathBuf::from("iterations_precond.png"),
    }
}

/// All four stock figures, in rendering order.
pub fn all(data_dir: &Path) -> Vec<Figure> {
    vec![
        err_h1(data_dir),
        iterations(data_dir),
        err_h1_precond_schwarz(data_dir),
        iterations_precond(data_dir),
    ]
}

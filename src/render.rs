use std::path::Path;

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::color;
use crate::data::loader;
use crate::data::model::Series;
use crate::error::Result;
use crate::figure::{LineStyle, PlotSpec, YScale};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Loads every series named by `spec`, draws them on one chart and writes the
/// chart to `output` as a PNG, overwriting any existing file. Prints one
/// confirmation line on success.
pub fn render_convergence_plot(spec: &PlotSpec, output: &Path) -> Result<()> {
    let series_list = loader::load_series(&spec.series)?;
    render_figure(spec, &series_list, output)?;
    println!("Figure enregistrée sous : {}", output.display());
    Ok(())
}

fn render_figure(spec: &PlotSpec, series_list: &[Series], output: &Path) -> Result<()> {
    let (width, height) = spec.pixel_size();
    let geo = Geometry::for_dpi(spec.dpi);
    log::debug!("rendering {}x{} px to {}", width, height, output.display());

    // A log axis has no position for y <= 0; such points are dropped.
    let log_axis = spec.y_scale == YScale::Log;
    let curves: Vec<(&str, Vec<(f64, f64)>)> = series_list
        .iter()
        .map(|s| {
            let pts = s
                .points()
                .filter(|&(x, y)| x.is_finite() && y.is_finite() && (!log_axis || y > 0.0))
                .collect();
            (s.label.as_str(), pts)
        })
        .collect();

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, pts) in &curves {
        for &(x, y) in pts {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let (x_min, x_max) = if x_min.is_finite() {
        pad_linear(x_min, x_max)
    } else {
        (0.0, 1.0)
    };
    let (y_min, y_max) = match spec.y_scale {
        YScale::Linear if y_min.is_finite() => pad_linear(y_min, y_max),
        YScale::Linear => (0.0, 1.0),
        YScale::Log if y_min.is_finite() => pad_log(y_min, y_max),
        YScale::Log => (0.1, 10.0),
    };

    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    match spec.y_scale {
        YScale::Linear => {
            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.title, ("sans-serif", geo.title))
                .margin(geo.margin)
                .x_label_area_size(geo.x_area)
                .y_label_area_size(geo.y_area)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
            chart
                .configure_mesh()
                .x_desc(&spec.x_label)
                .y_desc(&spec.y_label)
                .axis_desc_style(("sans-serif", geo.desc))
                .label_style(("sans-serif", geo.tick))
                .bold_line_style(BLACK.mix(0.2))
                .light_line_style(BLACK.mix(0.08))
                .draw()?;
            draw_series_set(&mut chart, spec, &curves, &geo)?;
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", geo.tick))
                .draw()?;
        }
        YScale::Log => {
            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.title, ("sans-serif", geo.title))
                .margin(geo.margin)
                .x_label_area_size(geo.x_area)
                .y_label_area_size(geo.y_area)
                .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())?;
            chart
                .configure_mesh()
                .x_desc(&spec.x_label)
                .y_desc(&spec.y_label)
                .axis_desc_style(("sans-serif", geo.desc))
                .label_style(("sans-serif", geo.tick))
                .bold_line_style(BLACK.mix(0.2))
                .light_line_style(BLACK.mix(0.08))
                .draw()?;
            draw_series_set(&mut chart, spec, &curves, &geo)?;
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", geo.tick))
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Series drawing (shared between the linear and log charts)
// ---------------------------------------------------------------------------

fn draw_series_set<'a, DB, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    spec: &PlotSpec,
    curves: &[(&str, Vec<(f64, f64)>)],
    geo: &Geometry,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    Y: Ranged<ValueType = f64>,
{
    let palette = color::generate_palette(curves.len());
    let legend_len = geo.legend_line;
    for ((label, pts), color) in curves.iter().zip(palette) {
        let style = color.stroke_width(geo.stroke);
        let anno = match spec.line_style {
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                pts.iter().copied(),
                geo.dash,
                geo.gap,
                style,
            ))?,
            LineStyle::Solid => {
                chart.draw_series(LineSeries::new(pts.iter().copied(), style))?
            }
        };
        anno.label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        if spec.markers {
            chart.draw_series(
                pts.iter()
                    .map(|&p| Circle::new(p, geo.marker, color.filled())),
            )?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Geometry: pixel sizes derived from the DPI (1 pt = dpi/72 px)
// ---------------------------------------------------------------------------

struct Geometry {
    title: i32,
    desc: i32,
    tick: i32,
    margin: i32,
    x_area: i32,
    y_area: i32,
    stroke: u32,
    marker: i32,
    dash: i32,
    gap: i32,
    legend_line: i32,
}

impl Geometry {
    fn for_dpi(dpi: u32) -> Self {
        let px = |pt: f64| (pt * dpi as f64 / 72.0).round();
        Geometry {
            title: px(12.0) as i32,
            desc: px(10.0) as i32,
            tick: px(8.0) as i32,
            margin: px(8.0) as i32,
            x_area: px(28.0) as i32,
            y_area: px(34.0) as i32,
            stroke: px(1.5) as u32,
            marker: px(3.0) as i32,
            dash: px(4.0) as i32,
            gap: px(3.0) as i32,
            legend_line: px(7.0) as i32,
        }
    }
}

/// Pads `[min, max]` by 5% on each side; a zero-width range (one distinct
/// value) is widened to a unit window around it.
fn pad_linear(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}

/// Multiplicative counterpart of [`pad_linear`] for the log axis; a
/// zero-width range is widened to one decade on each side. Callers pass
/// positive bounds only.
fn pad_log(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min / 10.0, max * 10.0);
    }
    let factor = (max / min).powf(0.05);
    (min / factor, max * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_padding_adds_margin_on_both_sides() {
        assert_eq!(pad_linear(0.0, 10.0), (-0.5, 10.5));
    }

    #[test]
    fn linear_padding_widens_a_single_value() {
        assert_eq!(pad_linear(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn log_padding_stays_positive() {
        let (lo, hi) = pad_log(1e-6, 1.0);
        assert!(lo > 0.0 && lo < 1e-6);
        assert!(hi > 1.0);
    }

    #[test]
    fn log_padding_widens_a_single_value_by_a_decade() {
        let (lo, hi) = pad_log(0.5, 0.5);
        assert!((lo - 0.05).abs() < 1e-12);
        assert!((hi - 5.0).abs() < 1e-12);
    }

    #[test]
    fn geometry_scales_with_dpi() {
        let at_300 = Geometry::for_dpi(300);
        assert_eq!(at_300.title, 50);
        assert_eq!(at_300.stroke, 6);
        let at_72 = Geometry::for_dpi(72);
        assert_eq!(at_72.title, 12);
        assert_eq!(at_72.tick, 8);
    }
}

use std::fs;
use std::path::Path;

use convplot::data::loader;
use convplot::{figure, render_convergence_plot, PlotError, PlotSpec};
use tempfile::TempDir;

fn write_dat(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Synthetic solver output in the `niter ; errH1` format.
fn write_solver_tree(dir: &Path) {
    for h in figure::H_VALUES {
        let rows: String = (1..=40)
            .map(|k| format!("{k} ; {:e}\n", 0.9f64.powi(k)))
            .collect();
        write_dat(dir, &format!("errH1_{h}.dat"), &rows);
    }
    for h in figure::PRECOND_H_VALUES {
        let rows: String = (1..=12)
            .map(|k| format!("{k} ; {:e}\n", 0.5f64.powi(k)))
            .collect();
        write_dat(dir, &format!("errH1precond_{h}.dat"), &rows);
    }
    write_dat(
        dir,
        "iter.dat",
        "0.025 ; 138\n0.01 ; 346\n0.005 ; 691\n0.0025 ; 1382\n",
    );
    write_dat(
        dir,
        "iter_precond.dat",
        "0.025 ; 21\n0.01 ; 34\n0.005 ; 48\n0.0025 ; 69\n",
    );
}

#[test]
fn stock_figures_render_full_size_pngs() {
    let tmp = TempDir::new().unwrap();
    write_solver_tree(tmp.path());
    for mut fig in figure::all(tmp.path()) {
        fig.output = tmp.path().join(&fig.output);
        fig.render().unwrap();
        assert!(fig.output.is_file());
        assert_eq!(image::image_dimensions(&fig.output).unwrap(), (2100, 1500));
    }
}

#[test]
fn series_follow_declaration_order() {
    let tmp = TempDir::new().unwrap();
    write_solver_tree(tmp.path());
    let fig = figure::err_h1(tmp.path());
    let series = loader::load_series(&fig.spec.series).unwrap();
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["h = 0.025", "h = 0.01", "h = 0.005", "h = 0.0025"]);
}

#[test]
fn rendering_twice_overwrites_the_png() {
    let tmp = TempDir::new().unwrap();
    write_dat(
        tmp.path(),
        "iter_precond.dat",
        "0.025 ; 21\n0.01 ; 34\n0.005 ; 48\n",
    );
    let mut fig = figure::iterations_precond(tmp.path());
    fig.output = tmp.path().join("out.png");
    fig.render().unwrap();
    let first = fs::read(&fig.output).unwrap();
    fig.render().unwrap();
    let second = fs::read(&fig.output).unwrap();
    // Rendering is deterministic, so overwriting reproduces the same image.
    assert_eq!(first, second);
    assert_eq!(image::image_dimensions(&fig.output).unwrap(), (2100, 1500));
}

#[test]
fn a_single_row_table_still_renders() {
    let tmp = TempDir::new().unwrap();
    write_dat(tmp.path(), "iter_precond.dat", "0.01 ; 57\n");
    let mut fig = figure::iterations_precond(tmp.path());
    fig.output = tmp.path().join("single.png");
    fig.render().unwrap();
    assert_eq!(image::image_dimensions(&fig.output).unwrap(), (2100, 1500));
}

#[test]
fn a_single_row_table_renders_on_the_log_axis() {
    let tmp = TempDir::new().unwrap();
    for h in figure::H_VALUES {
        write_dat(tmp.path(), &format!("errH1_{h}.dat"), "1 ; 0.5\n");
    }
    let mut fig = figure::err_h1(tmp.path());
    fig.output = tmp.path().join("single_log.png");
    fig.render().unwrap();
    assert!(fig.output.is_file());
}

#[test]
fn a_missing_input_fails_before_any_output() {
    let tmp = TempDir::new().unwrap();
    let mut fig = figure::iterations_precond(tmp.path());
    fig.output = tmp.path().join("never.png");
    let err = fig.render().unwrap_err();
    assert!(matches!(err, PlotError::FileNotFound(_)));
    assert!(!fig.output.exists());
}

#[test]
fn a_non_numeric_field_fails_before_any_output() {
    let tmp = TempDir::new().unwrap();
    write_dat(tmp.path(), "iter_precond.dat", "0.025 ; 21\n0.01 ; abc\n");
    let mut fig = figure::iterations_precond(tmp.path());
    fig.output = tmp.path().join("never.png");
    let err = fig.render().unwrap_err();
    assert!(matches!(err, PlotError::DataFormat { .. }));
    assert!(!fig.output.exists());
}

#[test]
fn figure_binary_prints_one_confirmation_line() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("dat")).unwrap();
    write_dat(
        &tmp.path().join("dat"),
        "iter_precond.dat",
        "0.025 ; 21\n0.01 ; 34\n",
    );

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_plot_iter_precond"))
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Figure enregistrée sous : iterations_precond.png\n");
    assert_eq!(
        image::image_dimensions(tmp.path().join("iterations_precond.png")).unwrap(),
        (2100, 1500)
    );
}

#[test]
fn log_scale_scenario_plots_the_parsed_values() {
    let tmp = TempDir::new().unwrap();
    write_dat(tmp.path(), "errH1_0.025.dat", "1;0.5\n2;0.1\n3;0.01\n");

    let fig = figure::err_h1(tmp.path());
    let series = loader::load_series(&fig.spec.series[..1]).unwrap();
    assert_eq!(series[0].x, [1.0, 2.0, 3.0]);
    assert_eq!(series[0].y, [0.5, 0.1, 0.01]);

    let spec = PlotSpec {
        series: fig.spec.series[..1].to_vec(),
        ..fig.spec.clone()
    };
    let out = tmp.path().join("scenario.png");
    render_convergence_plot(&spec, &out).unwrap();
    assert_eq!(image::image_dimensions(&out).unwrap(), (2100, 1500));
}

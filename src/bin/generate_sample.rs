//! Writes a synthetic `dat/` tree shaped like the solver's output, for demos
//! and manual testing of the figure binaries.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use convplot::figure::{H_VALUES, PRECOND_H_VALUES};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Conjugate-gradient convergence factor on a mesh of size `h`; the
/// condition number grows like h^-2, so the factor approaches 1 as h shrinks.
fn cg_rate(h: f64) -> f64 {
    (1.0 - 2.0 * h) / (1.0 + 2.0 * h)
}

/// Convergence factor with Schwarz preconditioning; the effective condition
/// number grows like h^-1 instead.
fn schwarz_rate(h: f64) -> f64 {
    let s = 2.0 * h.sqrt();
    (1.0 - s) / (1.0 + s)
}

/// One simulated solver run: geometric error decay with mild multiplicative
/// noise, recorded per iteration and stopped below 1e-6 or at 2000
/// iterations, matching the solver's loop guard.
fn simulate_run(rate: f64, rng: &mut SimpleRng) -> Vec<(u32, f64)> {
    let mut rows = Vec::new();
    let mut err: f64 = 1.0;
    let mut niter = 0u32;
    while err > 1e-6 && niter < 2000 {
        niter += 1;
        err *= rate * rng.gauss(0.0, 0.03).exp();
        rows.push((niter, err));
    }
    rows
}

/// Rows `niter ; errH1`, one per iteration, in the solver's format.
fn write_error_curve(path: &Path, rows: &[(u32, f64)]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for &(k, err) in rows {
        writeln!(out, "{k} ; {err:.6e}")?;
    }
    out.flush()?;
    Ok(())
}

/// Rows `h ; niter`, one per mesh size.
fn write_iteration_table(path: &Path, rows: &[(f64, u32)]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for &(h, n) in rows {
        writeln!(out, "{h} ; {n}")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let dat = Path::new("dat");
    std::fs::create_dir_all(dat).context("creating the dat directory")?;

    let mut iter_rows: Vec<(f64, u32)> = Vec::new();
    let mut iter_precond_rows: Vec<(f64, u32)> = Vec::new();

    for &h in &H_VALUES {
        let run = simulate_run(cg_rate(h), &mut rng);
        write_error_curve(&dat.join(format!("errH1_{h}.dat")), &run)?;
        iter_rows.push((h, run.last().map_or(0, |r| r.0)));

        let run = simulate_run(schwarz_rate(h), &mut rng);
        if PRECOND_H_VALUES.contains(&h) {
            write_error_curve(&dat.join(format!("errH1precond_{h}.dat")), &run)?;
        }
        iter_precond_rows.push((h, run.last().map_or(0, |r| r.0)));
    }

    write_iteration_table(&dat.join("iter.dat"), &iter_rows)?;
    write_iteration_table(&dat.join("iter_precond.dat"), &iter_precond_rows)?;

    println!(
        "Wrote {} data files to {}",
        H_VALUES.len() + PRECOND_H_VALUES.len() + 2,
        dat.display()
    );
    Ok(())
}

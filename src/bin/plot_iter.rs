//! Iterations to convergence against mesh size, with and without
//! preconditioning.

use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    convplot::figure::iterations(Path::new("dat")).render()?;
    Ok(())
}

//! Iterations of the preconditioned solver against mesh size.

use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    convplot::figure::iterations_precond(Path::new("dat")).render()?;
    Ok(())
}

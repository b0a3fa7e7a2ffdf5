//! H1 error against iteration count for the Schwarz-preconditioned runs.

use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    convplot::figure::err_h1_precond_schwarz(Path::new("dat")).render()?;
    Ok(())
}

//! H1 error against iteration count, one curve per mesh size.

use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    convplot::figure::err_h1(Path::new("dat")).render()?;
    Ok(())
}

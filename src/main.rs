use std::path::PathBuf;

use anyhow::Context;
use convplot::figure;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional positional argument overriding the data directory.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dat"));

    for fig in figure::all(&data_dir) {
        log::info!("rendering {}", fig.output.display());
        fig.render()
            .with_context(|| format!("rendering {}", fig.output.display()))?;
    }
    Ok(())
}

//! CLI entry point for tileable texture generation

use clap::Parser;
use tilesmith::io::cli::{Cli, TextureJob};

fn main() -> tilesmith::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let written = TextureJob::new(cli).run()?;
    for path in &written {
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

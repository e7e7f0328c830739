//! docindex: build index-page metadata for a directory of HTML documents
//!
//! Writes the plain JSON summary to stdout or to `--output`. Logs go to stderr.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use docindex::IndexBuilder;
use docindex::config::Config;
use docindex::provider::GitHistory;
use docindex_docs::FsStore;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;

    let builder = IndexBuilder::new(config.index_config());
    let summary = builder
        .build(&FsStore, &GitHistory, &GitHistory)
        .with_context(|| format!("failed to index {}", builder.config().docs_dir.display()))?;
    let json = summary.to_plain().to_json(config.compact)?;

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote index summary");
        }
        None => println!("{json}"),
    }

    Ok(())
}

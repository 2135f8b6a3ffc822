//! freebies-seed binary.
//!
//! Reads `seed.toml` (or the path given with `--config`), opens the SQLite
//! store it names, and replaces its contents with the sample dataset.
//!
//! ```
//! cargo run -p freebies-seed -- --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use freebies_core::store::FreebieStore;
use freebies_seed::SeedConfig;
use freebies_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Load sample data into a freebies store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "seed.toml")]
  config: PathBuf,

  /// Print the inserted rows as JSON.
  #[arg(long)]
  json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FREEBIES"))
    .build()
    .context("failed to read config file")?;

  let seed_cfg: SeedConfig = settings
    .try_deserialize()
    .context("failed to deserialise SeedConfig")?;

  let store_path = expand_tilde(&seed_cfg.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let report = freebies_seed::seed(&store)
    .await
    .context("failed to seed store")?;

  for freebie in &report.freebies {
    if let Some(details) = store
      .freebie_details(freebie.id())
      .await
      .context("failed to read back seeded freebie")?
    {
      tracing::info!("{details}");
    }
  }

  store.close().await.context("failed to close store")?;

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  }

  tracing::info!("Seeded {}", store_path.display());
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

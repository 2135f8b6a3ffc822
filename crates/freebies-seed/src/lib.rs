//! Sample-data loader for the freebies store.
//!
//! [`seed`] wipes whatever the store holds and inserts a fixed dataset: two
//! companies, three devs, and four freebies. Running it twice leaves the
//! store in the same state as running it once.

use std::path::PathBuf;

use freebies_core::{
  entity::{Company, Dev, Freebie, NewCompany, NewDev},
  store::FreebieStore,
};
use serde::{Deserialize, Serialize};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `seed.toml` and `FREEBIES_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
  /// SQLite database file. A leading `~/` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("freebies.db") }

impl Default for SeedConfig {
  fn default() -> Self { Self { store_path: default_store_path() } }
}

// ─── Report ───────────────────────────────────────────────────────────────────

/// Every row the loader inserted, with store-assigned ids.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
  pub companies: Vec<Company>,
  pub devs:      Vec<Dev>,
  pub freebies:  Vec<Freebie>,
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Reset `store` and load the sample dataset.
///
/// Companies and devs are committed together in their own batches before the
/// freebies that reference them.
pub async fn seed<S: FreebieStore>(store: &S) -> Result<SeedReport, S::Error> {
  store.clear().await?;

  let companies = store
    .add_companies(vec![
      NewCompany::new("TechCorp", 1990),
      NewCompany::new("InnovateLLC", 1985),
    ])
    .await?;
  let devs = store
    .add_devs(vec![
      NewDev::new("Alice"),
      NewDev::new("Bob"),
      NewDev::new("Charlie"),
    ])
    .await?;

  let [techcorp, innovate] = companies.as_slice() else {
    unreachable!("two companies were inserted");
  };
  let [alice, bob, charlie] = devs.as_slice() else {
    unreachable!("three devs were inserted");
  };

  let freebies = store
    .add_freebies(vec![
      techcorp.give_freebie(alice, "Sticker", 5),
      techcorp.give_freebie(bob, "Mug", 10),
      innovate.give_freebie(alice, "T-Shirt", 20),
      innovate.give_freebie(charlie, "Backpack", 50),
    ])
    .await?;

  tracing::info!(
    companies = companies.len(),
    devs = devs.len(),
    freebies = freebies.len(),
    "seed data inserted"
  );

  Ok(SeedReport { companies, devs, freebies })
}

#[cfg(test)]
mod tests;

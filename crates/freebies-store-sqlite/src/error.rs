//! Error type for `freebies-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] freebies_core::Error),

  /// Includes foreign-key violations, e.g. a freebie pointing at a missing
  /// dev, or deleting a company that still has freebies.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for `freebies-core`.

use thiserror::Error;

use crate::entity::{CompanyId, DevId, FreebieId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("company not found: {0}")]
  CompanyNotFound(CompanyId),

  #[error("dev not found: {0}")]
  DevNotFound(DevId),

  #[error("freebie not found: {0}")]
  FreebieNotFound(FreebieId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

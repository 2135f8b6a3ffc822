//! Mapping between SQLite rows and domain types.
//!
//! Ids are stored as plain `INTEGER PRIMARY KEY` columns and wrapped in their
//! newtypes on the way out. The column lists here must match the `SELECT`
//! order the mappers expect.

use freebies_core::entity::{
  Company, CompanyId, Dev, DevId, Freebie, FreebieDetails, FreebieId,
};
use rusqlite::Row;

// ─── Companies ───────────────────────────────────────────────────────────────

pub const COMPANY_COLUMNS: &str = "c.id, c.name, c.founding_year";

pub fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
  Ok(Company {
    id:            CompanyId(row.get(0)?),
    name:          row.get(1)?,
    founding_year: row.get(2)?,
  })
}

// ─── Devs ────────────────────────────────────────────────────────────────────

pub const DEV_COLUMNS: &str = "d.id, d.name";

pub fn dev_from_row(row: &Row<'_>) -> rusqlite::Result<Dev> {
  Ok(Dev { id: DevId(row.get(0)?), name: row.get(1)? })
}

// ─── Freebies ────────────────────────────────────────────────────────────────

pub const FREEBIE_COLUMNS: &str = "f.id, f.item_name, f.value, f.dev_id, f.company_id";

pub fn freebie_from_row(row: &Row<'_>) -> rusqlite::Result<Freebie> {
  Ok(Freebie::from_row(
    FreebieId(row.get(0)?),
    row.get(1)?,
    row.get(2)?,
    DevId(row.get(3)?),
    CompanyId(row.get(4)?),
  ))
}

/// Expects `d.name, f.item_name, c.name`.
pub fn details_from_row(row: &Row<'_>) -> rusqlite::Result<FreebieDetails> {
  Ok(FreebieDetails {
    dev_name:     row.get(0)?,
    item_name:    row.get(1)?,
    company_name: row.get(2)?,
  })
}

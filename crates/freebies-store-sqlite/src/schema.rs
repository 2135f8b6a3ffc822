//! SQL schema for the freebies SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS companies (
    id            INTEGER PRIMARY KEY,
    name          TEXT    NOT NULL,
    founding_year INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS devs (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

-- The only link between companies and devs. Any company<->dev view is a
-- join over this table.
CREATE TABLE IF NOT EXISTS freebies (
    id         INTEGER PRIMARY KEY,
    item_name  TEXT    NOT NULL,
    value      INTEGER NOT NULL,
    dev_id     INTEGER NOT NULL REFERENCES devs(id),
    company_id INTEGER NOT NULL REFERENCES companies(id)
);

-- A freebie's issuing company never changes.
CREATE TRIGGER IF NOT EXISTS freebies_company_fixed
BEFORE UPDATE OF company_id ON freebies
WHEN NEW.company_id IS NOT OLD.company_id
BEGIN
    SELECT RAISE(ABORT, 'freebie company cannot be reassigned');
END;

CREATE INDEX IF NOT EXISTS freebies_dev_idx     ON freebies(dev_id);
CREATE INDEX IF NOT EXISTS freebies_company_idx ON freebies(company_id);

PRAGMA user_version = 1;
";

//! [`SqliteStore`], the SQLite implementation of [`FreebieStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, Params, Row};

use freebies_core::{
  entity::{
    Company, CompanyId, Dev, DevId, Freebie, FreebieDetails, FreebieId,
    NewCompany, NewDev, NewFreebie,
  },
  store::FreebieStore,
};

use crate::{
  encode::{
    COMPANY_COLUMNS, DEV_COLUMNS, FREEBIE_COLUMNS, company_from_row,
    details_from_row, dev_from_row, freebie_from_row,
  },
  schema::SCHEMA,
  Error, Result,
};

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A freebies store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. The
/// connection is released when the last clone is dropped, or explicitly with
/// [`SqliteStore::close`].
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, surfacing any error from doing so.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a query returning at most one row.
  async fn select_one<T, P>(
    &self,
    sql: String,
    params: P,
    map: RowMapper<T>,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
    P: Params + Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| Ok(conn.query_row(&sql, params, map).optional()?))
      .await?;
    Ok(row)
  }

  /// Run a query and collect every row.
  async fn select_all<T, P>(
    &self,
    sql: String,
    params: P,
    map: RowMapper<T>,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    P: Params + Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params, map)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Run a single write statement and return the number of affected rows.
  async fn execute<P>(&self, sql: &'static str, params: P) -> Result<usize>
  where
    P: Params + Send + 'static,
  {
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, params)?))
      .await?;
    Ok(changed)
  }
}

// ─── FreebieStore impl ───────────────────────────────────────────────────────

impl FreebieStore for SqliteStore {
  type Error = Error;

  // ── Companies ─────────────────────────────────────────────────────────────

  async fn add_company(&self, input: NewCompany) -> Result<Company> {
    let mut added = self.add_companies(vec![input]).await?;
    Ok(added.remove(0))
  }

  async fn add_companies(&self, input: Vec<NewCompany>) -> Result<Vec<Company>> {
    let companies = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut out = Vec::with_capacity(input.len());
        {
          let mut stmt = tx.prepare(
            "INSERT INTO companies (name, founding_year) VALUES (?1, ?2)",
          )?;
          for new in input {
            let id = stmt.insert(rusqlite::params![new.name, new.founding_year])?;
            out.push(Company {
              id:            CompanyId(id),
              name:          new.name,
              founding_year: new.founding_year,
            });
          }
        }
        tx.commit()?;
        Ok(out)
      })
      .await?;

    tracing::debug!(count = companies.len(), "added companies");
    Ok(companies)
  }

  async fn get_company(&self, id: CompanyId) -> Result<Option<Company>> {
    self
      .select_one(
        format!("SELECT {COMPANY_COLUMNS} FROM companies c WHERE c.id = ?1"),
        [id.0],
        company_from_row,
      )
      .await
  }

  async fn list_companies(&self) -> Result<Vec<Company>> {
    self
      .select_all(
        format!("SELECT {COMPANY_COLUMNS} FROM companies c ORDER BY c.id"),
        (),
        company_from_row,
      )
      .await
  }

  async fn update_company(&self, company: &Company) -> Result<()> {
    let id = company.id;
    let changed = self
      .execute(
        "UPDATE companies SET name = ?1, founding_year = ?2 WHERE id = ?3",
        (company.name.clone(), company.founding_year, id.0),
      )
      .await?;

    if changed == 0 {
      return Err(freebies_core::Error::CompanyNotFound(id).into());
    }
    Ok(())
  }

  async fn delete_company(&self, id: CompanyId) -> Result<bool> {
    let changed = self
      .execute("DELETE FROM companies WHERE id = ?1", [id.0])
      .await?;
    Ok(changed > 0)
  }

  async fn oldest_company(&self) -> Result<Option<Company>> {
    self
      .select_one(
        format!(
          "SELECT {COMPANY_COLUMNS} FROM companies c
           ORDER BY c.founding_year, c.id
           LIMIT 1"
        ),
        (),
        company_from_row,
      )
      .await
  }

  // ── Devs ──────────────────────────────────────────────────────────────────

  async fn add_dev(&self, input: NewDev) -> Result<Dev> {
    let mut added = self.add_devs(vec![input]).await?;
    Ok(added.remove(0))
  }

  async fn add_devs(&self, input: Vec<NewDev>) -> Result<Vec<Dev>> {
    let devs = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut out = Vec::with_capacity(input.len());
        {
          let mut stmt = tx.prepare("INSERT INTO devs (name) VALUES (?1)")?;
          for new in input {
            let id = stmt.insert([&new.name])?;
            out.push(Dev { id: DevId(id), name: new.name });
          }
        }
        tx.commit()?;
        Ok(out)
      })
      .await?;

    tracing::debug!(count = devs.len(), "added devs");
    Ok(devs)
  }

  async fn get_dev(&self, id: DevId) -> Result<Option<Dev>> {
    self
      .select_one(
        format!("SELECT {DEV_COLUMNS} FROM devs d WHERE d.id = ?1"),
        [id.0],
        dev_from_row,
      )
      .await
  }

  async fn list_devs(&self) -> Result<Vec<Dev>> {
    self
      .select_all(
        format!("SELECT {DEV_COLUMNS} FROM devs d ORDER BY d.id"),
        (),
        dev_from_row,
      )
      .await
  }

  async fn update_dev(&self, dev: &Dev) -> Result<()> {
    let id = dev.id;
    let changed = self
      .execute("UPDATE devs SET name = ?1 WHERE id = ?2", (dev.name.clone(), id.0))
      .await?;

    if changed == 0 {
      return Err(freebies_core::Error::DevNotFound(id).into());
    }
    Ok(())
  }

  async fn delete_dev(&self, id: DevId) -> Result<bool> {
    let changed = self.execute("DELETE FROM devs WHERE id = ?1", [id.0]).await?;
    Ok(changed > 0)
  }

  async fn received_one(&self, dev: DevId, item_name: &str) -> Result<bool> {
    let item_name = item_name.to_owned();
    let found = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT EXISTS (
             SELECT 1 FROM freebies WHERE dev_id = ?1 AND item_name = ?2
           )",
          rusqlite::params![dev.0, item_name],
          |row| row.get::<_, bool>(0),
        )?)
      })
      .await?;
    Ok(found)
  }

  // ── Freebies ──────────────────────────────────────────────────────────────

  async fn add_freebie(&self, input: NewFreebie) -> Result<Freebie> {
    let mut added = self.add_freebies(vec![input]).await?;
    Ok(added.remove(0))
  }

  async fn add_freebies(&self, input: Vec<NewFreebie>) -> Result<Vec<Freebie>> {
    let freebies = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut out = Vec::with_capacity(input.len());
        {
          let mut stmt = tx.prepare(
            "INSERT INTO freebies (item_name, value, dev_id, company_id)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for new in input {
            let id = stmt.insert(rusqlite::params![
              new.item_name(),
              new.value(),
              new.dev().0,
              new.company().0,
            ])?;
            out.push(new.into_freebie(FreebieId(id)));
          }
        }
        tx.commit()?;
        Ok(out)
      })
      .await?;

    tracing::debug!(count = freebies.len(), "added freebies");
    Ok(freebies)
  }

  async fn get_freebie(&self, id: FreebieId) -> Result<Option<Freebie>> {
    self
      .select_one(
        format!("SELECT {FREEBIE_COLUMNS} FROM freebies f WHERE f.id = ?1"),
        [id.0],
        freebie_from_row,
      )
      .await
  }

  async fn list_freebies(&self) -> Result<Vec<Freebie>> {
    self
      .select_all(
        format!("SELECT {FREEBIE_COLUMNS} FROM freebies f ORDER BY f.id"),
        (),
        freebie_from_row,
      )
      .await
  }

  async fn freebies_for_dev(&self, dev: DevId) -> Result<Vec<Freebie>> {
    self
      .select_all(
        format!(
          "SELECT {FREEBIE_COLUMNS} FROM freebies f
           WHERE f.dev_id = ?1
           ORDER BY f.id"
        ),
        [dev.0],
        freebie_from_row,
      )
      .await
  }

  async fn freebies_for_company(&self, company: CompanyId) -> Result<Vec<Freebie>> {
    self
      .select_all(
        format!(
          "SELECT {FREEBIE_COLUMNS} FROM freebies f
           WHERE f.company_id = ?1
           ORDER BY f.id"
        ),
        [company.0],
        freebie_from_row,
      )
      .await
  }

  async fn freebie_details(&self, id: FreebieId) -> Result<Option<FreebieDetails>> {
    self
      .select_one(
        "SELECT d.name, f.item_name, c.name
         FROM freebies f
         JOIN devs      d ON d.id = f.dev_id
         JOIN companies c ON c.id = f.company_id
         WHERE f.id = ?1"
          .to_owned(),
        [id.0],
        details_from_row,
      )
      .await
  }

  async fn give_away(
    &self,
    current_owner: DevId,
    new_owner:     DevId,
    freebie:       FreebieId,
  ) -> Result<bool> {
    // The ownership check and the reassignment are one statement, so there
    // is no window where another writer can slip in between them.
    let outcome: Option<bool> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE freebies SET dev_id = ?1 WHERE id = ?2 AND dev_id = ?3",
          rusqlite::params![new_owner.0, freebie.0, current_owner.0],
        )?;
        if changed > 0 {
          return Ok(Some(true));
        }

        let exists = conn
          .query_row(
            "SELECT 1 FROM freebies WHERE id = ?1",
            [freebie.0],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        Ok(exists.then_some(false))
      })
      .await?;

    match outcome {
      Some(moved) => {
        tracing::debug!(
          %freebie, from = %current_owner, to = %new_owner, moved,
          "give away"
        );
        Ok(moved)
      }
      None => Err(freebies_core::Error::FreebieNotFound(freebie).into()),
    }
  }

  // ── Derived relations ─────────────────────────────────────────────────────

  async fn companies_for_dev(&self, dev: DevId) -> Result<Vec<Company>> {
    self
      .select_all(
        format!(
          "SELECT DISTINCT {COMPANY_COLUMNS}
           FROM companies c
           JOIN freebies f ON f.company_id = c.id
           WHERE f.dev_id = ?1
           ORDER BY c.id"
        ),
        [dev.0],
        company_from_row,
      )
      .await
  }

  async fn devs_for_company(&self, company: CompanyId) -> Result<Vec<Dev>> {
    self
      .select_all(
        format!(
          "SELECT DISTINCT {DEV_COLUMNS}
           FROM devs d
           JOIN freebies f ON f.dev_id = d.id
           WHERE f.company_id = ?1
           ORDER BY d.id"
        ),
        [company.0],
        dev_from_row,
      )
      .await
  }

  // ── Bulk ──────────────────────────────────────────────────────────────────

  async fn clear(&self) -> Result<()> {
    let (freebies, devs, companies) = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        let freebies = tx.execute("DELETE FROM freebies", ())?;
        let devs = tx.execute("DELETE FROM devs", ())?;
        let companies = tx.execute("DELETE FROM companies", ())?;
        tx.commit()?;
        Ok((freebies, devs, companies))
      })
      .await?;

    tracing::debug!(freebies, devs, companies, "cleared store");
    Ok(())
  }
}

//! Entity model: companies, devs, and the freebies that link them.
//!
//! Each table has its own integer identity newtype so a [`DevId`] can never be
//! passed where a [`CompanyId`] is expected. Records that have not been
//! persisted yet are separate `New*` types; only the store hands out ids.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Identity ────────────────────────────────────────────────────────────────

macro_rules! row_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
      Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(pub i64);

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

row_id!(
  /// Primary key of a row in the `companies` table.
  CompanyId
);
row_id!(
  /// Primary key of a row in the `devs` table.
  DevId
);
row_id!(
  /// Primary key of a row in the `freebies` table.
  FreebieId
);

// ─── Company ─────────────────────────────────────────────────────────────────

/// A company that gives out freebies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub id:            CompanyId,
  pub name:          String,
  pub founding_year: i32,
}

/// Input to [`crate::store::FreebieStore::add_company`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
  pub name:          String,
  pub founding_year: i32,
}

impl NewCompany {
  pub fn new(name: impl Into<String>, founding_year: i32) -> Self {
    Self { name: name.into(), founding_year }
  }
}

// ─── Dev ─────────────────────────────────────────────────────────────────────

/// A developer who collects freebies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dev {
  pub id:   DevId,
  pub name: String,
}

/// Input to [`crate::store::FreebieStore::add_dev`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDev {
  pub name: String,
}

impl NewDev {
  pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

// ─── Freebie ─────────────────────────────────────────────────────────────────

/// An item a company gave to a dev.
///
/// The issuing company is fixed at construction and has no setter. The owning
/// dev only changes through [`crate::ops::give_away`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freebie {
  id:        FreebieId,
  item_name: String,
  value:     i64,
  dev:       DevId,
  company:   CompanyId,
}

impl Freebie {
  /// Rebuild a freebie from a stored row. Intended for storage backends.
  pub fn from_row(
    id: FreebieId,
    item_name: String,
    value: i64,
    dev: DevId,
    company: CompanyId,
  ) -> Self {
    Self { id, item_name, value, dev, company }
  }

  pub fn id(&self) -> FreebieId { self.id }

  pub fn item_name(&self) -> &str { &self.item_name }

  pub fn value(&self) -> i64 { self.value }

  /// The dev who currently owns this freebie.
  pub fn dev(&self) -> DevId { self.dev }

  /// The company that issued this freebie.
  pub fn company(&self) -> CompanyId { self.company }

  pub(crate) fn set_dev(&mut self, dev: DevId) { self.dev = dev; }

  /// Describe who owns this freebie and where it came from.
  ///
  /// `dev` and `company` must be the records this freebie points at.
  pub fn details(&self, dev: &Dev, company: &Company) -> FreebieDetails {
    debug_assert_eq!(dev.id, self.dev);
    debug_assert_eq!(company.id, self.company);
    FreebieDetails {
      dev_name:     dev.name.clone(),
      item_name:    self.item_name.clone(),
      company_name: company.name.clone(),
    }
  }
}

/// A freebie that has been handed out but not yet stored.
///
/// Only [`Company::give_freebie`](crate::entity::Company::give_freebie)
/// creates one. It carries no id; the store assigns one when it is added.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a NewFreebie is not stored until it is passed to FreebieStore::add_freebie"]
pub struct NewFreebie {
  pub(crate) item_name: String,
  pub(crate) value:     i64,
  pub(crate) dev:       DevId,
  pub(crate) company:   CompanyId,
}

impl NewFreebie {
  pub fn item_name(&self) -> &str { &self.item_name }

  pub fn value(&self) -> i64 { self.value }

  pub fn dev(&self) -> DevId { self.dev }

  pub fn company(&self) -> CompanyId { self.company }

  /// Attach the id assigned by the store.
  pub fn into_freebie(self, id: FreebieId) -> Freebie {
    Freebie {
      id,
      item_name: self.item_name,
      value: self.value,
      dev: self.dev,
      company: self.company,
    }
  }
}

// ─── Details ─────────────────────────────────────────────────────────────────

/// Human-readable ownership line for a freebie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreebieDetails {
  pub dev_name:     String,
  pub item_name:    String,
  pub company_name: String,
}

impl fmt::Display for FreebieDetails {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} owns a {} from {}",
      self.dev_name, self.item_name, self.company_name
    )
  }
}

//! The `FreebieStore` trait.
//!
//! Implemented by storage backends (e.g. `freebies-store-sqlite`). The seed
//! loader and any other caller depend on this abstraction, and receive the
//! store handle explicitly rather than reaching for a global connection.

use std::future::Future;

use crate::entity::{
  Company, CompanyId, Dev, DevId, Freebie, FreebieDetails, FreebieId,
  NewCompany, NewDev, NewFreebie,
};

/// Abstraction over a relational freebies store.
///
/// Every method is its own unit of work: batch inserts and [`clear`] commit
/// all of their rows together or none of them.
///
/// [`clear`]: FreebieStore::clear
pub trait FreebieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Companies ─────────────────────────────────────────────────────────

  fn add_company(
    &self,
    input: NewCompany,
  ) -> impl Future<Output = Result<Company, Self::Error>> + Send + '_;

  /// Insert several companies in one transaction, returned in input order.
  fn add_companies(
    &self,
    input: Vec<NewCompany>,
  ) -> impl Future<Output = Result<Vec<Company>, Self::Error>> + Send + '_;

  /// Retrieve a company by id. Returns `None` if not found.
  fn get_company(
    &self,
    id: CompanyId,
  ) -> impl Future<Output = Result<Option<Company>, Self::Error>> + Send + '_;

  /// All companies, ordered by id.
  fn list_companies(
    &self,
  ) -> impl Future<Output = Result<Vec<Company>, Self::Error>> + Send + '_;

  /// Overwrite the name and founding year of an existing company.
  fn update_company<'a>(
    &'a self,
    company: &'a Company,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete a company. Fails while any freebie still references it.
  /// Returns `false` if there was no such company.
  fn delete_company(
    &self,
    id: CompanyId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The company with the earliest founding year, ties broken by lowest id.
  fn oldest_company(
    &self,
  ) -> impl Future<Output = Result<Option<Company>, Self::Error>> + Send + '_;

  // ── Devs ──────────────────────────────────────────────────────────────

  fn add_dev(
    &self,
    input: NewDev,
  ) -> impl Future<Output = Result<Dev, Self::Error>> + Send + '_;

  /// Insert several devs in one transaction, returned in input order.
  fn add_devs(
    &self,
    input: Vec<NewDev>,
  ) -> impl Future<Output = Result<Vec<Dev>, Self::Error>> + Send + '_;

  fn get_dev(
    &self,
    id: DevId,
  ) -> impl Future<Output = Result<Option<Dev>, Self::Error>> + Send + '_;

  /// All devs, ordered by id.
  fn list_devs(
    &self,
  ) -> impl Future<Output = Result<Vec<Dev>, Self::Error>> + Send + '_;

  fn update_dev<'a>(
    &'a self,
    dev: &'a Dev,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete a dev. Fails while the dev still owns any freebie.
  fn delete_dev(
    &self,
    id: DevId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Whether the dev currently owns a freebie named exactly `item_name`.
  fn received_one<'a>(
    &'a self,
    dev: DevId,
    item_name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Freebies ──────────────────────────────────────────────────────────

  /// Persist a freebie produced by
  /// [`Company::give_freebie`](crate::entity::Company::give_freebie).
  fn add_freebie(
    &self,
    input: NewFreebie,
  ) -> impl Future<Output = Result<Freebie, Self::Error>> + Send + '_;

  /// Insert several freebies in one transaction, returned in input order.
  fn add_freebies(
    &self,
    input: Vec<NewFreebie>,
  ) -> impl Future<Output = Result<Vec<Freebie>, Self::Error>> + Send + '_;

  fn get_freebie(
    &self,
    id: FreebieId,
  ) -> impl Future<Output = Result<Option<Freebie>, Self::Error>> + Send + '_;

  /// All freebies, ordered by id.
  fn list_freebies(
    &self,
  ) -> impl Future<Output = Result<Vec<Freebie>, Self::Error>> + Send + '_;

  /// Freebies the dev currently owns, ordered by id.
  fn freebies_for_dev(
    &self,
    dev: DevId,
  ) -> impl Future<Output = Result<Vec<Freebie>, Self::Error>> + Send + '_;

  /// Freebies the company issued, ordered by id.
  fn freebies_for_company(
    &self,
    company: CompanyId,
  ) -> impl Future<Output = Result<Vec<Freebie>, Self::Error>> + Send + '_;

  /// The ownership line for a freebie. Returns `None` if not found.
  fn freebie_details(
    &self,
    id: FreebieId,
  ) -> impl Future<Output = Result<Option<FreebieDetails>, Self::Error>> + Send + '_;

  /// Move a freebie from `current_owner` to `new_owner` in a single atomic
  /// step.
  ///
  /// Returns `false` without changing anything if `current_owner` does not
  /// own it. Returns an error if the freebie does not exist.
  fn give_away(
    &self,
    current_owner: DevId,
    new_owner: DevId,
    freebie: FreebieId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Derived relations ─────────────────────────────────────────────────

  /// Distinct companies that issued a freebie the dev owns, ordered by id.
  fn companies_for_dev(
    &self,
    dev: DevId,
  ) -> impl Future<Output = Result<Vec<Company>, Self::Error>> + Send + '_;

  /// Distinct devs owning a freebie the company issued, ordered by id.
  fn devs_for_company(
    &self,
    company: CompanyId,
  ) -> impl Future<Output = Result<Vec<Dev>, Self::Error>> + Send + '_;

  // ── Bulk ──────────────────────────────────────────────────────────────

  /// Delete every freebie, then every dev, then every company, in one
  /// transaction.
  fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

//! Domain operations over in-memory records.
//!
//! None of these touch storage. [`crate::store::FreebieStore`] exposes the
//! persisted counterparts of the same operations.

use crate::entity::{Company, Dev, Freebie, NewFreebie};

impl Company {
  /// Hand `dev` a new freebie issued by this company.
  ///
  /// Nothing is persisted: pass the result to
  /// [`FreebieStore::add_freebie`](crate::store::FreebieStore::add_freebie).
  pub fn give_freebie(
    &self,
    dev: &Dev,
    item_name: impl Into<String>,
    value: i64,
  ) -> NewFreebie {
    NewFreebie {
      item_name: item_name.into(),
      value,
      dev: dev.id,
      company: self.id,
    }
  }
}

/// The company with the earliest founding year.
///
/// Ties on `founding_year` go to the lowest id. Returns `None` for an empty
/// slice.
pub fn oldest_company(companies: &[Company]) -> Option<&Company> {
  companies.iter().min_by_key(|c| (c.founding_year, c.id))
}

/// Whether `dev` currently owns any freebie named exactly `item_name`.
pub fn received_one(dev: &Dev, freebies: &[Freebie], item_name: &str) -> bool {
  freebies
    .iter()
    .any(|f| f.dev() == dev.id && f.item_name() == item_name)
}

/// Move `freebie` from `current_owner` to `new_owner`.
///
/// Returns `false` and leaves the freebie untouched if `current_owner` does
/// not own it.
pub fn give_away(
  current_owner: &Dev,
  new_owner: &Dev,
  freebie: &mut Freebie,
) -> bool {
  if freebie.dev() != current_owner.id {
    return false;
  }
  freebie.set_dev(new_owner.id);
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entity::{CompanyId, DevId, FreebieId};

  fn company(id: i64, name: &str, founding_year: i32) -> Company {
    Company { id: CompanyId(id), name: name.into(), founding_year }
  }

  fn dev(id: i64, name: &str) -> Dev { Dev { id: DevId(id), name: name.into() } }

  #[test]
  fn give_freebie_links_company_and_dev() {
    let techcorp = company(1, "TechCorp", 1990);
    let alice = dev(1, "Alice");

    let pending = techcorp.give_freebie(&alice, "Sticker", 5);
    assert_eq!(pending.company(), techcorp.id);
    assert_eq!(pending.dev(), alice.id);
    assert_eq!(pending.item_name(), "Sticker");
    assert_eq!(pending.value(), 5);

    let freebie = pending.into_freebie(FreebieId(7));
    assert_eq!(freebie.id(), FreebieId(7));
    assert_eq!(freebie.company(), techcorp.id);
    assert_eq!(freebie.dev(), alice.id);
  }

  #[test]
  fn oldest_company_picks_minimum_year() {
    let companies = vec![
      company(1, "TechCorp", 1990),
      company(2, "InnovateLLC", 1985),
      company(3, "NewCo", 2020),
    ];
    let oldest = oldest_company(&companies).unwrap();
    assert_eq!(oldest.name, "InnovateLLC");
    assert!(companies.iter().all(|c| oldest.founding_year <= c.founding_year));
  }

  #[test]
  fn oldest_company_empty_is_none() {
    assert!(oldest_company(&[]).is_none());
  }

  #[test]
  fn oldest_company_tie_goes_to_lowest_id() {
    let companies = vec![
      company(5, "Later", 1970),
      company(2, "Earlier", 1970),
      company(9, "Young", 2001),
    ];
    assert_eq!(oldest_company(&companies).unwrap().id, CompanyId(2));
  }

  #[test]
  fn received_one_is_exact_and_owner_scoped() {
    let techcorp = company(1, "TechCorp", 1990);
    let innovate = company(2, "InnovateLLC", 1985);
    let alice = dev(1, "Alice");
    let bob = dev(2, "Bob");

    let freebies = vec![
      techcorp.give_freebie(&alice, "Sticker", 5).into_freebie(FreebieId(1)),
      innovate.give_freebie(&alice, "T-Shirt", 20).into_freebie(FreebieId(2)),
      techcorp.give_freebie(&bob, "Mug", 10).into_freebie(FreebieId(3)),
    ];

    assert!(received_one(&alice, &freebies, "Sticker"));
    assert!(received_one(&alice, &freebies, "T-Shirt"));
    assert!(!received_one(&alice, &freebies, "Backpack"));
    assert!(!received_one(&alice, &freebies, "sticker"));
    assert!(!received_one(&alice, &freebies, "Mug"));
    assert!(received_one(&bob, &freebies, "Mug"));
  }

  #[test]
  fn give_away_from_owner_transfers() {
    let techcorp = company(1, "TechCorp", 1990);
    let alice = dev(1, "Alice");
    let bob = dev(2, "Bob");
    let mut sticker =
      techcorp.give_freebie(&alice, "Sticker", 5).into_freebie(FreebieId(1));

    assert!(give_away(&alice, &bob, &mut sticker));
    assert_eq!(sticker.dev(), bob.id);
    assert_eq!(sticker.company(), techcorp.id);
  }

  #[test]
  fn give_away_from_non_owner_is_refused() {
    let techcorp = company(1, "TechCorp", 1990);
    let alice = dev(1, "Alice");
    let bob = dev(2, "Bob");
    let charlie = dev(3, "Charlie");
    let mut mug =
      techcorp.give_freebie(&bob, "Mug", 10).into_freebie(FreebieId(2));

    assert!(!give_away(&alice, &charlie, &mut mug));
    assert_eq!(mug.dev(), bob.id);
  }

  #[test]
  fn company_survives_repeated_transfers() {
    let innovate = company(2, "InnovateLLC", 1985);
    let devs = [dev(1, "Alice"), dev(2, "Bob"), dev(3, "Charlie")];
    let mut shirt =
      innovate.give_freebie(&devs[0], "T-Shirt", 20).into_freebie(FreebieId(1));

    for round in 0..9 {
      let from = &devs[round % 3];
      let to = &devs[(round + 1) % 3];
      assert!(give_away(from, to, &mut shirt));
      assert_eq!(shirt.company(), innovate.id);
    }
    assert_eq!(shirt.dev(), devs[0].id);
  }

  #[test]
  fn details_renders_ownership_line() {
    let techcorp = company(1, "TechCorp", 1990);
    let alice = dev(1, "Alice");
    let sticker =
      techcorp.give_freebie(&alice, "Sticker", 5).into_freebie(FreebieId(1));

    assert_eq!(
      sticker.details(&alice, &techcorp).to_string(),
      "Alice owns a Sticker from TechCorp"
    );
  }

  #[test]
  fn freebie_serialises_with_plain_ids() {
    let techcorp = company(4, "TechCorp", 1990);
    let alice = dev(3, "Alice");
    let sticker =
      techcorp.give_freebie(&alice, "Sticker", 5).into_freebie(FreebieId(1));

    let json = serde_json::to_value(&sticker).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "id": 1,
        "item_name": "Sticker",
        "value": 5,
        "dev": 3,
        "company": 4,
      })
    );
  }
}

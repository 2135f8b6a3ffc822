//! Derived many-to-many views between companies and devs.
//!
//! There is no association table. Who-got-what-from-whom is computed from the
//! current freebie rows every time, so it cannot drift from them.

use std::collections::BTreeSet;

use crate::entity::{Company, CompanyId, Dev, DevId, Freebie};

/// Distinct companies that issued a freebie `dev` currently owns, by id.
pub fn companies_for_dev(dev: &Dev, freebies: &[Freebie]) -> Vec<CompanyId> {
  freebies
    .iter()
    .filter(|f| f.dev() == dev.id)
    .map(Freebie::company)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

/// Distinct devs currently owning a freebie issued by `company`, by id.
pub fn devs_for_company(company: &Company, freebies: &[Freebie]) -> Vec<DevId> {
  freebies
    .iter()
    .filter(|f| f.company() == company.id)
    .map(Freebie::dev)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{entity::FreebieId, ops::give_away};

  #[test]
  fn views_follow_current_ownership() {
    let techcorp = Company { id: CompanyId(1), name: "TechCorp".into(), founding_year: 1990 };
    let innovate = Company { id: CompanyId(2), name: "InnovateLLC".into(), founding_year: 1985 };
    let alice = Dev { id: DevId(1), name: "Alice".into() };
    let bob = Dev { id: DevId(2), name: "Bob".into() };

    let mut freebies = vec![
      techcorp.give_freebie(&alice, "Sticker", 5).into_freebie(FreebieId(1)),
      innovate.give_freebie(&alice, "T-Shirt", 20).into_freebie(FreebieId(2)),
      techcorp.give_freebie(&alice, "Pen", 1).into_freebie(FreebieId(3)),
      techcorp.give_freebie(&bob, "Mug", 10).into_freebie(FreebieId(4)),
    ];

    assert_eq!(companies_for_dev(&alice, &freebies), vec![techcorp.id, innovate.id]);
    assert_eq!(companies_for_dev(&bob, &freebies), vec![techcorp.id]);
    assert_eq!(devs_for_company(&techcorp, &freebies), vec![alice.id, bob.id]);
    assert_eq!(devs_for_company(&innovate, &freebies), vec![alice.id]);

    assert!(give_away(&alice, &bob, &mut freebies[1]));

    assert_eq!(companies_for_dev(&alice, &freebies), vec![techcorp.id]);
    assert_eq!(companies_for_dev(&bob, &freebies), vec![techcorp.id, innovate.id]);
    assert_eq!(devs_for_company(&innovate, &freebies), vec![bob.id]);
  }

  #[test]
  fn no_freebies_means_no_relations() {
    let alice = Dev { id: DevId(1), name: "Alice".into() };
    assert!(companies_for_dev(&alice, &[]).is_empty());
  }
}

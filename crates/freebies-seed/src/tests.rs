//! Seed loader tests against a real `SqliteStore`.

use freebies_core::{
  entity::{NewCompany, NewDev},
  ops,
  store::FreebieStore,
};
use freebies_store_sqlite::SqliteStore;

use crate::{SeedConfig, seed};

async fn seeded() -> (SqliteStore, crate::SeedReport) {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  let report = seed(&store).await.expect("seed");
  (store, report)
}

#[tokio::test]
async fn inserts_fixed_dataset() {
  let (store, report) = seeded().await;

  let names: Vec<_> = report.companies.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["TechCorp", "InnovateLLC"]);
  let names: Vec<_> = report.devs.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, ["Alice", "Bob", "Charlie"]);

  assert_eq!(store.list_companies().await.unwrap(), report.companies);
  assert_eq!(store.list_devs().await.unwrap(), report.devs);
  assert_eq!(store.list_freebies().await.unwrap(), report.freebies);

  let mut lines = Vec::new();
  for freebie in &report.freebies {
    let details = store.freebie_details(freebie.id()).await.unwrap().unwrap();
    lines.push(details.to_string());
  }
  assert_eq!(
    lines,
    [
      "Alice owns a Sticker from TechCorp",
      "Bob owns a Mug from TechCorp",
      "Alice owns a T-Shirt from InnovateLLC",
      "Charlie owns a Backpack from InnovateLLC",
    ]
  );
}

#[tokio::test]
async fn reseeding_replaces_existing_rows() {
  let (store, first) = seeded().await;
  store.add_company(NewCompany::new("Stray", 2001)).await.unwrap();
  store.add_dev(NewDev::new("Stray Dev")).await.unwrap();

  let second = seed(&store).await.unwrap();

  assert_eq!(store.list_companies().await.unwrap().len(), 2);
  assert_eq!(store.list_devs().await.unwrap().len(), 3);
  assert_eq!(store.list_freebies().await.unwrap().len(), 4);
  let names = |r: &crate::SeedReport| -> Vec<String> {
    r.freebies.iter().map(|f| f.item_name().to_owned()).collect()
  };
  assert_eq!(names(&first), names(&second));
}

#[tokio::test]
async fn oldest_company_is_innovate() {
  let (store, report) = seeded().await;

  let oldest = store.oldest_company().await.unwrap().unwrap();
  assert_eq!(oldest.name, "InnovateLLC");
  assert_eq!(ops::oldest_company(&report.companies), Some(&oldest));
}

#[tokio::test]
async fn alice_received_sticker_not_backpack() {
  let (store, report) = seeded().await;
  let alice = &report.devs[0];

  assert!(store.received_one(alice.id, "Sticker").await.unwrap());
  assert!(!store.received_one(alice.id, "Backpack").await.unwrap());
  assert!(ops::received_one(alice, &report.freebies, "Sticker"));
  assert!(!ops::received_one(alice, &report.freebies, "Backpack"));
}

#[tokio::test]
async fn alice_cannot_give_away_bobs_mug() {
  let (store, report) = seeded().await;
  let (alice, bob) = (&report.devs[0], &report.devs[1]);
  let mug = report
    .freebies
    .iter()
    .find(|f| f.item_name() == "Mug")
    .unwrap();

  assert!(!store.give_away(alice.id, bob.id, mug.id()).await.unwrap());
  let stored = store.get_freebie(mug.id()).await.unwrap().unwrap();
  assert_eq!(stored.dev(), bob.id);

  let mut local = mug.clone();
  assert!(!ops::give_away(alice, bob, &mut local));
  assert_eq!(local.dev(), bob.id);
}

#[tokio::test]
async fn seeded_relations() {
  let (store, report) = seeded().await;
  let (techcorp, innovate) = (&report.companies[0], &report.companies[1]);
  let alice = &report.devs[0];

  assert_eq!(
    store.companies_for_dev(alice.id).await.unwrap(),
    vec![techcorp.clone(), innovate.clone()]
  );
  let devs: Vec<_> = store
    .devs_for_company(innovate.id)
    .await
    .unwrap()
    .into_iter()
    .map(|d| d.name)
    .collect();
  assert_eq!(devs, ["Alice", "Charlie"]);
}

#[tokio::test]
async fn seeds_file_store_named_by_config() {
  let dir = tempfile::tempdir().unwrap();
  let cfg = SeedConfig { store_path: dir.path().join("freebies.db") };

  let store = SqliteStore::open(&cfg.store_path).await.unwrap();
  seed(&store).await.unwrap();
  store.close().await.unwrap();

  let store = SqliteStore::open(&cfg.store_path).await.unwrap();
  assert_eq!(store.list_freebies().await.unwrap().len(), 4);
}

#[test]
fn config_defaults_to_local_db() {
  assert_eq!(
    SeedConfig::default().store_path,
    std::path::PathBuf::from("freebies.db")
  );
}

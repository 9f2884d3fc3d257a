use std::fs;

use names_core::record::Gender;
use names_core::store::{LoadError, RecordStore};
use tempfile::tempdir;

const DATASET: &str = r#"[
  {
    "given_name": "ដារ៉ា",
    "surname": "សុខ",
    "given_name_romanized": "Dara",
    "surname_romanized": "Sok",
    "gender": "male",
    "meaning": "star",
    "origin": "Pali",
    "category": "nature",
    "popular": true
  },
  {
    "given_name": "ចន្ទា",
    "surname": "ហេង",
    "given_name_romanized": "Chanda",
    "surname_romanized": "Heng",
    "gender": "female"
  }
]"#;

#[test]
fn loads_records_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.json");
    fs::write(&path, DATASET).unwrap();

    let store = RecordStore::from_path(&path).unwrap();

    assert_eq!(store.len(), 2);
    let dara = &store.records()[0];
    assert_eq!(dara.given_name_romanized(), "Dara");
    assert_eq!(dara.gender(), Gender::Male);
    assert!(dara.is_popular());
    let chanda = &store.records()[1];
    assert_eq!(chanda.meaning(), None);
    assert!(!chanda.is_popular());
}

#[test]
fn unknown_gender_is_a_load_error() {
    let bad = DATASET.replace("\"female\"", "\"ghost\"");
    let result = RecordStore::from_json_reader(bad.as_bytes());
    assert!(matches!(result, Err(LoadError::Parse(_))), "got {result:?}");
}

#[test]
fn empty_dataset_is_a_load_error() {
    let result = RecordStore::from_json_reader("[]".as_bytes());
    assert!(matches!(result, Err(LoadError::Empty)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = RecordStore::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn load_or_fallback_substitutes_builtin_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let store = RecordStore::load_or_fallback(&path);
    let fallback = RecordStore::fallback();

    assert!(!store.is_empty());
    assert_eq!(store.version(), fallback.version());
}

#[test]
fn fallback_records_are_complete() {
    let store = RecordStore::fallback();
    let stats = store.statistics();

    assert_eq!(stats.total, 6);
    assert!(stats.by_gender.male > 0 && stats.by_gender.female > 0 && stats.by_gender.unisex > 0);
    assert!(store.iter().all(|r| r.meaning().is_some() && r.category().is_some()));
}

#[test]
fn dataset_version_tracks_content_and_order() {
    let a = RecordStore::from_json_reader(DATASET.as_bytes()).unwrap();
    let b = RecordStore::from_json_reader(DATASET.as_bytes()).unwrap();
    assert_eq!(a.version(), b.version());
    assert!(a.version().as_str().starts_with("sha256:"));

    let mut reversed = a.records().to_vec();
    reversed.reverse();
    assert_ne!(RecordStore::new(reversed).version(), a.version());

    let changed = DATASET.replace("\"star\"", "\"stars\"");
    let c = RecordStore::from_json_reader(changed.as_bytes()).unwrap();
    assert_ne!(c.version(), a.version());
}

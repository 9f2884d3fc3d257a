use names_core::record::{Gender, NameRecord, RecordError, RecordFields};

fn fields() -> RecordFields {
    RecordFields {
        given_name: "សុវណ្ណ".to_string(),
        surname: "កែវ".to_string(),
        given_name_romanized: "Sovann".to_string(),
        surname_romanized: "Keo".to_string(),
        gender: Gender::Male,
        meaning: Some("gold".to_string()),
        origin: None,
        category: None,
        popular: false,
    }
}

#[test]
fn invariant_required_fields_non_empty() {
    let result = NameRecord::new("", "កែវ", "Sovann", "Keo", Gender::Male);
    assert_eq!(result, Err(RecordError::EmptyField("given_name")));

    let result = NameRecord::new("សុវណ្ណ", "កែវ", "Sovann", "   ", Gender::Male);
    assert_eq!(result, Err(RecordError::EmptyField("surname_romanized")));
}

#[test]
fn invariant_blank_optional_fields_are_absent() {
    let record = NameRecord::new("សុវណ្ណ", "កែវ", "Sovann", "Keo", Gender::Male)
        .unwrap()
        .with_meaning("")
        .with_origin("  ")
        .with_category("precious");

    assert_eq!(record.meaning(), None);
    assert_eq!(record.origin(), None);
    assert_eq!(record.category(), Some("precious"));
    assert!(!record.is_popular(), "popularity defaults to false");
}

#[test]
fn invariant_value_equality() {
    let a = NameRecord::try_from(fields()).unwrap();
    let b = NameRecord::try_from(fields()).unwrap();
    assert_eq!(a, b);

    let c = b.clone().with_popular(true);
    assert_ne!(a, c);
}

#[test]
fn gender_parses_at_the_boundary() {
    assert_eq!(" Female ".parse::<Gender>(), Ok(Gender::Female));
    assert_eq!("UNISEX".parse::<Gender>(), Ok(Gender::Unisex));
    assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
    assert!(matches!(
        "other".parse::<Gender>(),
        Err(RecordError::UnknownGender(raw)) if raw == "other"
    ));
}

#[test]
fn deserialization_validates_records() {
    let json = r#"{
        "given_name": "",
        "surname": "កែវ",
        "given_name_romanized": "Sovann",
        "surname_romanized": "Keo",
        "gender": "male"
    }"#;
    let err = serde_json::from_str::<NameRecord>(json).unwrap_err();
    assert!(err.to_string().contains("given_name"), "unexpected error: {err}");

    let json = r#"{
        "given_name": "សុវណ្ណ",
        "surname": "កែវ",
        "given_name_romanized": "Sovann",
        "surname_romanized": "Keo",
        "gender": "robot"
    }"#;
    assert!(serde_json::from_str::<NameRecord>(json).is_err());
}

#[test]
fn deserialization_fills_defaults() {
    let json = r#"{
        "given_name": "ចន្ទា",
        "surname": "ហេង",
        "given_name_romanized": "Chanda",
        "surname_romanized": "Heng",
        "gender": "Female",
        "meaning": "moon",
        "origin": ""
    }"#;
    let record: NameRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.gender(), Gender::Female);
    assert_eq!(record.meaning(), Some("moon"));
    assert_eq!(record.origin(), None);
    assert_eq!(record.category(), None);
    assert!(!record.is_popular());
}

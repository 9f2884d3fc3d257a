use names_core::similarity::{
    are_similar, are_similar_within, capitalize_words, edit_distance, normalize,
};

#[test]
fn edit_distance_base_cases() {
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", ""), 0);
}

#[test]
fn edit_distance_classic_examples() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("sitting", "kitten"), 3);
    assert_eq!(edit_distance("flaw", "lawn"), 2);
    assert_eq!(edit_distance("sovann", "sovan"), 1);
}

#[test]
fn edit_distance_identity() {
    for x in ["", "a", "Sokha", "សុខា", "Sôvǎn"] {
        assert_eq!(edit_distance(x, x), 0, "distance({x:?}, {x:?})");
    }
}

#[test]
fn edit_distance_counts_characters_not_bytes() {
    assert_eq!(edit_distance("é", "e"), 1);
    assert_eq!(edit_distance("សុខា", "សុខ"), 1);
}

#[test]
fn normalize_folds_diacritics_and_case() {
    assert_eq!(normalize("Sôvǎn"), "sovan");
    assert_eq!(normalize("ÉLÈVE"), "eleve");
    assert_eq!(normalize("Nguyễn Đức"), "nguyen duc");
    // Non-Latin scripts pass through untouched.
    assert_eq!(normalize("សុខា"), "សុខា");
}

#[test]
fn romanized_variants_are_similar() {
    assert!(are_similar("Sovan", "Sôvǎn"));
    assert!(are_similar("Sovann", "Sovan"));
    assert!(are_similar("Chanda", "Chantha"));
    assert!(!are_similar("Dara", "Vibol"));
}

#[test]
fn threshold_is_inclusive() {
    assert!(are_similar_within("abc", "abd", 1));
    assert!(!are_similar_within("abc", "xyz", 2));
    assert!(are_similar_within("abc", "xyz", 3));
    assert!(!are_similar_within("Sovan", "Sôvǎnn", 0));
}

#[test]
fn capitalize_words_formats_each_segment() {
    assert_eq!(capitalize_words("sok DARA"), "Sok Dara");
    assert_eq!(capitalize_words("hello  world"), "Hello  World");
    assert_eq!(capitalize_words(""), "");
    assert_eq!(capitalize_words("élodie"), "Élodie");
}

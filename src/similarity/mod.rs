//! Diacritic-insensitive matching of romanized text.

pub mod distance;
pub mod folding;

pub use distance::edit_distance;
pub use folding::{fold_char, normalize};

use crate::config::DEFAULT_SIMILARITY_THRESHOLD;

/// `true` when the normalized forms of `a` and `b` are at most
/// two edits apart.
pub fn are_similar(a: &str, b: &str) -> bool {
    are_similar_within(a, b, DEFAULT_SIMILARITY_THRESHOLD)
}

pub fn are_similar_within(a: &str, b: &str, threshold: usize) -> bool {
    edit_distance(&normalize(a), &normalize(b)) <= threshold
}

/// Uppercase the first character of each space-separated word and lowercase
/// the rest. Runs of spaces are preserved.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Small built-in name list used when no dataset can be loaded.

use crate::record::{Gender, NameRecord};

struct Entry {
    given: &'static str,
    surname: &'static str,
    given_romanized: &'static str,
    surname_romanized: &'static str,
    gender: Gender,
    meaning: &'static str,
    origin: &'static str,
    category: &'static str,
    popular: bool,
}

static ENTRIES: &[Entry] = &[
    Entry {
        given: "សុខា",
        surname: "ចាន់",
        given_romanized: "Sokha",
        surname_romanized: "Chan",
        gender: Gender::Unisex,
        meaning: "happiness",
        origin: "Khmer",
        category: "virtue",
        popular: true,
    },
    Entry {
        given: "សុវណ្ណ",
        surname: "កែវ",
        given_romanized: "Sovann",
        surname_romanized: "Keo",
        gender: Gender::Male,
        meaning: "gold",
        origin: "Pali",
        category: "precious",
        popular: true,
    },
    Entry {
        given: "ស្រីពៅ",
        surname: "លី",
        given_romanized: "Sreypov",
        surname_romanized: "Ly",
        gender: Gender::Female,
        meaning: "youngest daughter",
        origin: "Khmer",
        category: "family",
        popular: true,
    },
    Entry {
        given: "ដារ៉ា",
        surname: "សុខ",
        given_romanized: "Dara",
        surname_romanized: "Sok",
        gender: Gender::Male,
        meaning: "star",
        origin: "Pali",
        category: "nature",
        popular: true,
    },
    Entry {
        given: "ចន្ទា",
        surname: "ហេង",
        given_romanized: "Chanda",
        surname_romanized: "Heng",
        gender: Gender::Female,
        meaning: "moon",
        origin: "Sanskrit",
        category: "nature",
        popular: false,
    },
    Entry {
        given: "វិបុល",
        surname: "ម៉ៅ",
        given_romanized: "Vibol",
        surname_romanized: "Mao",
        gender: Gender::Male,
        meaning: "abundance",
        origin: "Pali",
        category: "virtue",
        popular: false,
    },
];

pub fn records() -> Vec<NameRecord> {
    ENTRIES
        .iter()
        .filter_map(|e| {
            NameRecord::new(
                e.given,
                e.surname,
                e.given_romanized,
                e.surname_romanized,
                e.gender,
            )
            .ok()
            .map(|record| {
                record
                    .with_meaning(e.meaning)
                    .with_origin(e.origin)
                    .with_category(e.category)
                    .with_popular(e.popular)
            })
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gender::Gender;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),
    #[error("Unknown gender: {0:?}")]
    UnknownGender(String),
}

/// Plain data-transfer shape of a record, as it appears in a dataset file.
///
/// Carries no invariants. Convert with `NameRecord::try_from` to obtain a
/// validated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub given_name: String,
    pub surname: String,
    pub given_name_romanized: String,
    pub surname_romanized: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

/// A single name: given name and surname in native script and romanized form,
/// plus cultural metadata.
///
/// Immutable once built. Required text fields are never empty and optional
/// fields are either absent or non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordFields", into = "RecordFields")]
pub struct NameRecord {
    given_name: String,
    surname: String,
    given_name_romanized: String,
    surname_romanized: String,
    gender: Gender,
    meaning: Option<String>,
    origin: Option<String>,
    category: Option<String>,
    popular: bool,
}

impl NameRecord {
    pub fn new(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        given_name_romanized: impl Into<String>,
        surname_romanized: impl Into<String>,
        gender: Gender,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            given_name: required("given_name", given_name.into())?,
            surname: required("surname", surname.into())?,
            given_name_romanized: required("given_name_romanized", given_name_romanized.into())?,
            surname_romanized: required("surname_romanized", surname_romanized.into())?,
            gender,
            meaning: None,
            origin: None,
            category: None,
            popular: false,
        })
    }

    // Blank optional values collapse to None.
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = optional(Some(meaning.into()));
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = optional(Some(origin.into()));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = optional(Some(category.into()));
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_name_romanized(&self) -> &str {
        &self.given_name_romanized
    }

    pub fn surname_romanized(&self) -> &str {
        &self.surname_romanized
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_popular(&self) -> bool {
        self.popular
    }
}

impl TryFrom<RecordFields> for NameRecord {
    type Error = RecordError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        let record = NameRecord::new(
            fields.given_name,
            fields.surname,
            fields.given_name_romanized,
            fields.surname_romanized,
            fields.gender,
        )?;

        Ok(NameRecord {
            meaning: optional(fields.meaning),
            origin: optional(fields.origin),
            category: optional(fields.category),
            popular: fields.popular,
            ..record
        })
    }
}

impl From<NameRecord> for RecordFields {
    fn from(record: NameRecord) -> Self {
        RecordFields {
            given_name: record.given_name,
            surname: record.surname,
            given_name_romanized: record.given_name_romanized,
            surname_romanized: record.surname_romanized,
            gender: record.gender,
            meaning: record.meaning,
            origin: record.origin,
            category: record.category,
            popular: record.popular,
        }
    }
}

fn required(field: &'static str, value: String) -> Result<String, RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::EmptyField(field));
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

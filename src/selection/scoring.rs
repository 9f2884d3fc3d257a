use crate::record::NameRecord;

/// Computes a popularity score for a record, used by the minimum-score filter.
pub trait PopularityScorer {
    fn score(&self, record: &NameRecord) -> u32;
}

/// Default scorer: 100 for popular records, 0 otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlagScorer;

pub const POPULAR_SCORE: u32 = 100;

impl PopularityScorer for FlagScorer {
    fn score(&self, record: &NameRecord) -> u32 {
        if record.is_popular() {
            POPULAR_SCORE
        } else {
            0
        }
    }
}

impl<F> PopularityScorer for F
where
    F: Fn(&NameRecord) -> u32,
{
    fn score(&self, record: &NameRecord) -> u32 {
        self(record)
    }
}

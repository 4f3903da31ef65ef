use itertools::Itertools;
use serde::Serialize;

use super::query_variant::QueryVariant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRecord {
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub modifier: String,
    #[serde(rename = "query")]
    pub suggestion: String,
}

impl SuggestionRecord {
    pub fn from_variant(variant: &QueryVariant, suggestion: String) -> Self {
        SuggestionRecord {
            category: variant.category.clone(),
            modifier: variant.modifier.clone(),
            suggestion,
        }
    }
}

/// Keeps the first record seen for each suggestion text, in input order.
/// Later duplicates are dropped along with their modifier and category.
pub fn remove_duplicates(records: Vec<SuggestionRecord>) -> Vec<SuggestionRecord> {
    records
        .into_iter()
        .unique_by(|r| r.suggestion.clone())
        .collect()
}

/// Suggestion records unique on their text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<SuggestionRecord>,
}

impl ResultSet {
    pub fn from_records(records: Vec<SuggestionRecord>) -> Self {
        ResultSet {
            records: remove_duplicates(records),
        }
    }

    pub fn records(&self) -> &[SuggestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

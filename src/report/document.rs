//! Output Document Module
//! JSON shape of the generated counts file.

use crate::config::{SOURCE_DESCRIPTION, SOURCE_NAME, SOURCE_URL};
use crate::stats::{CategoryCounts, CategorySummary};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// `meta` block of the counts file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Metadata {
    pub source: String,
    pub source_url: String,
    pub generation_date: NaiveDate,
    pub total_input_rows: u64,
    pub description: String,
}

impl Metadata {
    pub fn new(generation_date: NaiveDate, total_input_rows: u64) -> Self {
        Self {
            source: SOURCE_NAME.to_string(),
            source_url: SOURCE_URL.to_string(),
            generation_date,
            total_input_rows,
            description: SOURCE_DESCRIPTION.to_string(),
        }
    }
}

/// `national` block: category id → summary, serialized as a JSON object in
/// mapping order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct National(Vec<(&'static str, CategorySummary)>);

impl National {
    pub fn get(&self, id: &str) -> Option<&CategorySummary> {
        self.0.iter().find(|(key, _)| *key == id).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CategorySummary)> {
        self.0.iter().map(|(id, s)| (*id, s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for National {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, summary) in &self.0 {
            map.serialize_entry(id, summary)?;
        }
        map.end()
    }
}

/// Complete counts document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OutputDocument {
    pub meta: Metadata,
    pub national: National,
}

impl OutputDocument {
    pub fn from_counts(counts: &CategoryCounts<'_>, generation_date: NaiveDate) -> Self {
        Self {
            meta: Metadata::new(generation_date, counts.total_rows()),
            national: National(counts.summaries()),
        }
    }

    /// Indented JSON, non-ASCII kept as-is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

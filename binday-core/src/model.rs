//! Domain data structures for sources and their collection calendars.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a source known to binday.
pub struct SourceId(pub String);

impl fmt::Display for SourceId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing the municipality behind a source.
pub struct SourceMeta {
    /// Unique identifier.
    pub id: SourceId,
    /// Display name of the council.
    pub title: String,
    /// One-line description shown next to the title.
    pub description: String,
    /// Public website of the council.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single bin collection on a given day.
pub struct CollectionEntry {
    /// Day of the collection.
    pub date: NaiveDate,
    /// Human label of the waste stream, absent when the source used an unknown code.
    pub waste_type: Option<String>,
    /// Icon identifier for the waste stream.
    pub icon: Option<String>,
}

impl CollectionEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(date: NaiveDate, waste_type: Option<String>, icon: Option<String>) -> Self {
        Self {
            date,
            waste_type,
            icon,
        }
    }
}

impl fmt::Display for CollectionEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.waste_type.as_deref().unwrap_or("Unknown");
        write!(formatter, "{} {label}", self.date.format("%Y-%m-%d"))?;
        if let Some(icon) = &self.icon {
            write!(formatter, " ({icon})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::CollectionEntry;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).expect("valid date")
    }

    #[test]
    fn display_includes_label_and_icon() {
        let entry = CollectionEntry::new(
            date(),
            Some("Cardboard".to_owned()),
            Some("mdi:package-variant".to_owned()),
        );
        assert_eq!(
            entry.to_string(),
            "2025-03-04 Cardboard (mdi:package-variant)",
            "label and icon rendered"
        );
    }

    #[test]
    fn display_falls_back_for_unknown_waste_type() {
        let entry = CollectionEntry::new(date(), None, None);
        assert_eq!(entry.to_string(), "2025-03-04 Unknown", "no icon suffix");
    }

    #[test]
    fn serializes_absent_fields_as_null() {
        let entry = CollectionEntry::new(date(), None, None);
        let json = serde_json::to_value(&entry).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({ "date": "2025-03-04", "waste_type": null, "icon": null }),
            "date is ISO formatted"
        );
    }
}

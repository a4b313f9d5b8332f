//! Traits describing source capabilities and the shared error type.

use async_trait::async_trait;
use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;

use crate::model::{CollectionEntry, SourceMeta};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while fetching a collection calendar.
pub enum SourceError {
    /// The request failed or the server answered with a non-success status.
    #[error("Transport error: {0}")]
    Transport(#[from] ReqwestError),
    /// An expected landmark is missing from the returned page.
    #[error("Unexpected page structure: {0}")]
    Structure(String),
    /// A date assembled from the page could not be parsed.
    #[error("Could not parse date {input:?}: {source}")]
    DateParse {
        /// The date string as assembled from the page.
        input: String,
        /// Underlying chrono error.
        source: ChronoParseError,
    },
}

impl SourceError {
    /// Shorthand for a [`SourceError::Structure`] error.
    #[must_use]
    pub fn structure<S: Into<String>>(what: S) -> Self {
        Self::Structure(what.into())
    }
}

#[async_trait]
/// A configured source that can fetch the collection calendar of one household.
pub trait CollectionSource: Send + Sync {
    /// Metadata describing the council behind this source.
    fn meta(&self) -> &SourceMeta;

    /// Fetch all collections currently published for the household.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the response cannot be parsed.
    /// No partial results are returned.
    async fn fetch(&self) -> Result<Vec<CollectionEntry>, SourceError>;
}

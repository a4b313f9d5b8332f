//! Source implementation for Tameside Council using its public bin-dates form.

mod calendar;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use binday_core::{
    model::{CollectionEntry, SourceId, SourceMeta},
    ports::{CollectionSource, SourceError},
};

pub use calendar::{CalendarDay, extract_calendar};

const ENDPOINT: &str = "https://public.tameside.gov.uk/forms/bin-dates.asp";

// Fixed values of the site's address wizard; posting them jumps straight to the
// results step.
const ADVANCE_SEARCH: &str = "Continue";
const STREET_FIELD_LINK: &str = "F01_I04_Town";
const WIZARD_HISTORY: &str = ",1,3,";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Household the calendar is fetched for.
pub struct SourceConfig {
    /// Postcode as entered by the user, spaces allowed.
    pub postcode: String,
    /// Unique property reference number (UPRN) of the address.
    #[serde(alias = "uprn")]
    pub property_reference: String,
}

impl SourceConfig {
    /// Construct a new configuration. Inputs are not validated.
    #[must_use]
    pub fn new<P: Into<String>, R: Into<String>>(postcode: P, property_reference: R) -> Self {
        Self {
            postcode: postcode.into(),
            property_reference: property_reference.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bin colours shown as markers on the calendar.
pub enum BinColour {
    /// General waste.
    Green,
    /// Cardboard.
    Blue,
    /// Garden waste.
    Brown,
    /// Plastic.
    Black,
}

impl BinColour {
    /// Look up a colour code as found in a marker's alt text.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "brown" => Some(Self::Brown),
            "black" => Some(Self::Black),
            _ => None,
        }
    }

    /// Human label of the waste stream.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "General Waste",
            Self::Blue => "Cardboard",
            Self::Brown => "Garden Waste",
            Self::Black => "Plastic",
        }
    }

    /// Material Design icon identifier.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Green => "mdi:trash-can-outline",
            Self::Blue => "mdi:package-variant",
            Self::Brown => "mdi:leaf-circle-outline",
            Self::Black => "mdi:bottle-soda-classic-outline",
        }
    }
}

/// Collection calendar of one Tameside household.
pub struct TamesideSource {
    client: Client,
    config: SourceConfig,
    endpoint: String,
    meta: SourceMeta,
}

impl TamesideSource {
    /// Create a new source bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client, config: SourceConfig) -> Self {
        Self {
            client,
            config,
            endpoint: ENDPOINT.to_owned(),
            meta: source_meta(),
        }
    }

    /// Post the form to `endpoint` instead of the council's server.
    #[must_use]
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Configuration of the household.
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl CollectionSource for TamesideSource {
    fn meta(&self) -> &SourceMeta {
        &self.meta
    }

    async fn fetch(&self) -> Result<Vec<CollectionEntry>, SourceError> {
        // The page lists several years; only the current one is used.
        let year = Local::now().year();

        debug!(endpoint = %self.endpoint, postcode = %self.config.postcode, "requesting bin dates");

        let html = self
            .client
            .post(&self.endpoint)
            .form(&form_fields(&self.config))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let days = extract_calendar(&html, year)?;
        debug!(days = days.len(), year, "extracted calendar table");

        let entries = collection_entries(&days, year)?;
        info!(entries = entries.len(), "fetched Tameside collections");

        Ok(entries)
    }
}

/// Build the boxed source for a household.
#[must_use]
pub fn plugin(client: Client, config: SourceConfig) -> Arc<dyn CollectionSource> {
    Arc::new(TamesideSource::new(client, config))
}

fn source_meta() -> SourceMeta {
    SourceMeta {
        id: SourceId(String::from("tameside_gov_uk")),
        title: String::from("Tameside Council"),
        description: String::from("Tameside Council, UK - Waste Collection"),
        url: String::from("https://www.tameside.gov.uk/"),
    }
}

/// The site encodes spaces in postcodes as `+`.
fn normalize_postcode(postcode: &str) -> String {
    postcode.replace(' ', "+")
}

fn form_fields(config: &SourceConfig) -> [(&'static str, String); 5] {
    let postcode = normalize_postcode(&config.postcode);
    let address = format!("{}-{postcode}", config.property_reference);
    [
        ("AdvanceSearch", ADVANCE_SEARCH.to_owned()),
        ("F01_I02_Postcode", postcode),
        ("F01_I03_Street", STREET_FIELD_LINK.to_owned()),
        ("history", WIZARD_HISTORY.to_owned()),
        ("F03_I01_SelectAddress", address),
    ]
}

/// One entry per marker, in document order. Any unparsable date aborts.
fn collection_entries(
    days: &[CalendarDay],
    year: i32,
) -> Result<Vec<CollectionEntry>, SourceError> {
    let mut entries = Vec::new();

    for day in days.iter().filter(|day| !day.colours.is_empty()) {
        let date = day.date(year)?;

        for code in &day.colours {
            let colour = BinColour::from_code(code);
            if colour.is_none() {
                warn!(code = %code, %date, "unrecognised bin colour");
            }

            entries.push(CollectionEntry::new(
                date,
                colour.map(|known| known.label().to_owned()),
                colour.map(|known| known.icon().to_owned()),
            ));
        }
    }

    Ok(entries)
}

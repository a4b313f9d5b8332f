//! Extraction of the bin-dates table from the council's calendar page.
//!
//! The page lists one section per year: an `h3` holding the year, and next to
//! it a table with one row per month. Each row has a `td.month` label and a
//! `td.day` cell per collection day, e.g. `3rd` followed by one marker image
//! per bin colour collected that day.

use binday_core::SourceError;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

/// Ordinal suffix on day labels ("st", "nd", "rd", "th").
const ORDINAL_SUFFIX_LEN: usize = 2;
/// Descriptive text the site appends to every marker's alt text after the colour.
const ALT_SUFFIX_LEN: usize = 9;
/// Day first, as the site is UK formatted. `%B` also accepts abbreviated month names.
const DATE_FORMAT: &str = "%d %B %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One collection day of the calendar table.
pub struct CalendarDay {
    /// Month label of the row the day belongs to, e.g. `January`.
    pub month: String,
    /// Day of month with the ordinal suffix removed, e.g. `3`.
    pub day: String,
    /// Colour code of every marker image in the cell, in markup order.
    pub colours: Vec<String>,
}

impl CalendarDay {
    /// Resolve the day to a calendar date within `year`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::DateParse`] when month and day do not form a valid date.
    pub fn date(&self, year: i32) -> Result<NaiveDate, SourceError> {
        let input = format!("{} {} {year}", self.day, self.month);
        NaiveDate::parse_from_str(&input, DATE_FORMAT)
            .map_err(|source| SourceError::DateParse { input, source })
    }
}

/// Extract all collection days listed under the heading for `year`.
///
/// # Errors
///
/// Returns [`SourceError::Structure`] when the year heading, its table, a month
/// label or a marker's alt text is missing.
pub fn extract_calendar(html: &str, year: i32) -> Result<Vec<CalendarDay>, SourceError> {
    let dom = Html::parse_document(html);

    let heading_selector = selector("h3");
    let table_selector = selector("table");
    let row_selector = selector("tr");
    let month_selector = selector("td.month");
    let day_selector = selector("td.day");
    let marker_selector = selector("img");

    let year_label = year.to_string();
    let heading = dom
        .select(&heading_selector)
        .find(|element| text_of(*element) == year_label)
        .ok_or_else(|| SourceError::structure(format!("no heading for year {year}")))?;

    let container = heading
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or_else(|| SourceError::structure("year heading has no parent element"))?;

    let table = container
        .select(&table_selector)
        .next()
        .ok_or_else(|| SourceError::structure(format!("no table in the {year} section")))?;

    let mut days = Vec::new();

    for row in table.select(&row_selector) {
        let mut cells = row.select(&day_selector).peekable();
        if cells.peek().is_none() {
            continue;
        }

        let month = row
            .select(&month_selector)
            .next()
            .map(text_of)
            .ok_or_else(|| SourceError::structure("calendar row without a month label"))?;

        for cell in cells {
            let colours = cell
                .select(&marker_selector)
                .map(|marker| {
                    marker
                        .value()
                        .attr("alt")
                        .map(|alt| strip_trailing_chars(alt, ALT_SUFFIX_LEN))
                        .ok_or_else(|| SourceError::structure("marker image without alt text"))
                })
                .collect::<Result<Vec<_>, _>>()?;

            days.push(CalendarDay {
                month: month.clone(),
                day: strip_trailing_chars(&text_of(cell), ORDINAL_SUFFIX_LEN),
                colours,
            });
        }
    }

    Ok(days)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector is valid CSS")
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Drop the last `count` characters of `text`.
fn strip_trailing_chars(text: &str, count: usize) -> String {
    let keep = text.chars().count().saturating_sub(count);
    text.chars().take(keep).collect()
}

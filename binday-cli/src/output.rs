use std::io::Write;

use anyhow::Result;
use binday_core::CollectionEntry;

/// Write collections ordered by date, one per line or as a JSON array.
pub(crate) fn render<W: Write>(
    writer: &mut W,
    mut entries: Vec<CollectionEntry>,
    json: bool,
) -> Result<()> {
    // Sources keep page order; present them chronologically.
    entries.sort_by_key(|entry| entry.date);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &entries)?;
        writeln!(writer)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(writer, "No collections published for this year yet.")?;
    }
    for entry in &entries {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}

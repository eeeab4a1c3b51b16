// crates/placeslim-core/src/emit.rs
use crate::error::Result;
use crate::model::PlaceRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Renders `const <identifier> = [...];` with compact JSON.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn render(places: &[PlaceRecord], identifier: &str) -> Result<String> {
    let json = serde_json::to_string(places)?;
    Ok(format!("const {identifier} = {json};"))
}

/// Writes the rendered declaration to `path`, replacing any existing file.
pub fn write_places(path: &Path, places: &[PlaceRecord], identifier: &str) -> Result<()> {
    let content = render(places, identifier)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    info!(path = %path.display(), records = places.len(), "wrote slimmed dataset");
    Ok(())
}

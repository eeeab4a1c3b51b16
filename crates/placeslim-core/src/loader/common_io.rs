// crates/placeslim-core/src/loader/common_io.rs
use crate::error::{Result, SlimError};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            SlimError::NotFound(format!("input file not found at {}: {}", path.display(), e))
        }
        _ => SlimError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip_path(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Reads the whole artifact into memory as UTF-8 text.
pub fn read_to_string(path: &Path) -> Result<String> {
    let mut reader = open_stream(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

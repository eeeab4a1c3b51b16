// crates/placeslim-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional decompression) and hands
//! the text to the [`extract`](crate::extract) step.

mod common_io;

pub use common_io::read_to_string;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlimError;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_to_string(&dir.path().join("nope.js")).unwrap_err();
        assert!(matches!(err, SlimError::NotFound(_)), "{err:?}");
    }

    #[test]
    fn reads_plain_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "export const areaContents = {{\"서울\": 1}};").unwrap();
        let text = read_to_string(file.path()).unwrap();
        assert!(text.contains("서울"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_by_extension() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("area_contents.js.gz");
        let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"export const areaContents = {};").unwrap();
        enc.finish().unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "export const areaContents = {};");
    }
}

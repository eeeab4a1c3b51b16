// crates/placeslim-core/src/config.rs
use std::path::PathBuf;

/// Where the crawler drops its export, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "../홈페이지 크롤링/data/area_contents.js";
/// Where the slimmed file is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data_places_new.js";
/// Name of the exported object in the source file.
pub const DEFAULT_SOURCE_IDENTIFIER: &str = "areaContents";
/// Name of the constant declared in the output file.
pub const DEFAULT_OUTPUT_IDENTIFIER: &str = "placeData";

/// Paths and declaration names for one slimming run.
///
/// `SlimConfig::default()` is the fixed layout the tool was written for;
/// the `with_*` builders exist so runs can be pointed at other files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlimConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source_identifier: String,
    pub output_identifier: String,
}

impl Default for SlimConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            source_identifier: DEFAULT_SOURCE_IDENTIFIER.to_string(),
            output_identifier: DEFAULT_OUTPUT_IDENTIFIER.to_string(),
        }
    }
}

impl SlimConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_source_identifier(mut self, name: impl Into<String>) -> Self {
        self.source_identifier = name.into();
        self
    }

    pub fn with_output_identifier(mut self, name: impl Into<String>) -> Self {
        self.output_identifier = name.into();
        self
    }
}

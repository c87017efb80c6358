//! Generator configuration
//!
//! All knobs are fixed at process start: segment length and line thickness
//! drive the numeral geometry, merge padding is consumed by the composition
//! layer only. Values come from defaults, an optional TOML file, or builder
//! calls, in that order of precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Rendering and composition configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Length of one segment in pixels; a numeral is 2 segments wide and
    /// 4 segments tall
    pub segment_length: u32,

    /// Stroke width in pixels, applied uniformly to every line
    pub line_thickness: u32,

    /// Padding around composed sheets, in pixels (composition layer only)
    pub merge_padding: u32,

    /// Directory receiving rendered numeral PNGs (the render cache)
    pub output_directory: PathBuf,

    /// Root directory for composed comparison sheets
    pub sheet_directory: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            segment_length: 50,
            line_thickness: 5,
            merge_padding: 40,
            output_directory: PathBuf::from("output/numerals"),
            sheet_directory: PathBuf::from("output/sheets"),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Set the segment length
    pub fn with_segment_length(mut self, segment_length: u32) -> Self {
        self.segment_length = segment_length;
        self
    }

    /// Set the line thickness
    pub fn with_line_thickness(mut self, line_thickness: u32) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    /// Set the merge padding
    pub fn with_merge_padding(mut self, merge_padding: u32) -> Self {
        self.merge_padding = merge_padding;
        self
    }

    /// Set the numeral output directory
    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    /// Set the sheet output root
    pub fn with_sheet_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sheet_directory = dir.into();
        self
    }

    /// Width of one numeral image: 2 segment lengths
    pub fn width(&self) -> u32 {
        self.segment_length * 2
    }

    /// Height of one numeral image: 4 segment lengths
    pub fn height(&self) -> u32 {
        self.segment_length * 4
    }

    /// Half the line thickness, rounded down; segment endpoints are nudged
    /// by this amount so strokes meet the stem cleanly
    pub fn offset(&self) -> i32 {
        (self.line_thickness / 2) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.segment_length, 50);
        assert_eq!(config.line_thickness, 5);
        assert_eq!(config.merge_padding, 40);
        assert_eq!(config.output_directory, PathBuf::from("output/numerals"));
    }

    #[test]
    fn test_derived_dimensions() {
        let config = GeneratorConfig::default();
        assert_eq!(config.width(), 100);
        assert_eq!(config.height(), 200);
        assert_eq!(config.offset(), 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneratorConfig::new()
            .with_segment_length(10)
            .with_line_thickness(3)
            .with_merge_padding(8)
            .with_output_directory("out/n")
            .with_sheet_directory("out/s");

        assert_eq!(config.segment_length, 10);
        assert_eq!(config.line_thickness, 3);
        assert_eq!(config.merge_padding, 8);
        assert_eq!(config.output_directory, PathBuf::from("out/n"));
        assert_eq!(config.sheet_directory, PathBuf::from("out/s"));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
segment_length = 25
line_thickness = 3
"#;
        let config: GeneratorConfig = toml::from_str(toml_str).expect("Should parse");
        assert_eq!(config.segment_length, 25);
        assert_eq!(config.line_thickness, 3);
        // Unspecified fields keep their defaults
        assert_eq!(config.merge_padding, 40);
    }

    #[test]
    fn test_parse_toml_unknown_field_error() {
        let result: Result<GeneratorConfig, _> = toml::from_str("segment_lenght = 25");
        assert!(result.is_err());
    }
}

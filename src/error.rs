//! Error types for rendering and composition

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering numerals or composing sheets.
///
/// All of these are fatal for the batch that hit them: rendering one numeral
/// is all-or-nothing, and a failure does not attempt the next numeral.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The output directory could not be created and still does not exist
    #[error("directory '{path}' was not created: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A raster canvas could not be allocated
    #[error("failed to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    /// PNG encode or decode failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Underlying filesystem operation failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

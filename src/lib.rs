//! Cistercian numeral renderer
//!
//! Renders Cistercian numerals (a historical system encoding a 1-9999 value
//! as line segments in the four quadrants of a vertical stem) as transparent
//! PNG images, computes segment-difference images across sets of numbers,
//! and composes rendered numerals into comparison sheets.
//!
//! # Example
//!
//! ```no_run
//! use cistercian::{GeneratorConfig, NumeralRenderer};
//!
//! let renderer = NumeralRenderer::new(GeneratorConfig::default());
//! let path = renderer.render(5038)?;
//! let diff = renderer.render_difference(&[5038, 4245])?;
//! # Ok::<(), cistercian::RenderError>(())
//! ```

pub mod cache;
pub mod canvas;
pub mod compose;
pub mod config;
pub mod error;
pub mod numeral;

pub use cache::{ArtifactCache, FileCache};
pub use canvas::Canvas;
pub use compose::{SheetComposer, DEMO_GROUPS};
pub use config::{ConfigError, GeneratorConfig};
pub use error::RenderError;
pub use numeral::{decompose, difference_segments, segments_for, NumeralRenderer, Quadrant, Segment};

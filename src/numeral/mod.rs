//! Numeral rendering
//!
//! Maps a number to its Cistercian glyph: decompose into 4 digits, look up
//! each digit's segments, trace them into the digit's quadrant around a
//! central stem, and encode the canvas as a transparent PNG. Results are
//! memoized on disk through the [`ArtifactCache`].

mod quadrant;
mod segment;

pub use quadrant::Quadrant;
pub use segment::{decompose, difference_segments, segments_for, Segment};

use std::path::PathBuf;

use log::debug;

use crate::cache::{ArtifactCache, FileCache};
use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::error::RenderError;

/// Renders Cistercian numeral images into a cache directory.
pub struct NumeralRenderer<C = FileCache> {
    config: GeneratorConfig,
    cache: C,
}

impl NumeralRenderer<FileCache> {
    /// Renderer backed by a file cache in the configured output directory.
    pub fn new(config: GeneratorConfig) -> Self {
        let cache = FileCache::new(&config.output_directory);
        Self { config, cache }
    }
}

impl<C: ArtifactCache> NumeralRenderer<C> {
    /// Renderer with a caller-provided cache.
    pub fn with_cache(config: GeneratorConfig, cache: C) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render the numeral for `number` and return the image path.
    ///
    /// Idempotent: the first call writes `{output_directory}/{number}.png`,
    /// later calls return the existing file untouched. Values at or above
    /// 10000 alias onto `number % 10000`.
    pub fn render(&self, number: u32) -> Result<PathBuf, RenderError> {
        let config = &self.config;
        self.cache.get_or_render(&format!("{number}.png"), |path| {
            debug!("rendering numeral {number} to {}", path.display());

            let mut canvas =
                Canvas::transparent(config.width(), config.height(), config.line_thickness)?;

            // Central stem, full height
            let stem_x = config.segment_length as i32;
            canvas.draw_line(stem_x, 0, stem_x, config.height() as i32);

            let quadrants =
                Quadrant::for_positions(config.segment_length as i32, config.offset());
            for (digit, quadrant) in decompose(number).into_iter().zip(&quadrants) {
                for segment in segments_for(digit) {
                    let ((x1, y1), (x2, y2)) = segment.endpoints(quadrant);
                    canvas.draw_line(x1, y1, x2, y2);
                }
            }

            canvas.encode(path)
        })
    }

    /// Render the difference image for `numbers` and return the image path.
    ///
    /// Only segments that do not cancel pairwise across all numbers are
    /// traced (see [`difference_segments`]); the stem is omitted, so a set
    /// that cancels completely yields a fully transparent image. The cache
    /// key joins the numbers in input order even though the computed
    /// difference is order-insensitive.
    pub fn render_difference(&self, numbers: &[u32]) -> Result<PathBuf, RenderError> {
        let joined = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-");

        let config = &self.config;
        let surviving = difference_segments(numbers);

        self.cache
            .get_or_render(&format!("difference-{joined}.png"), |path| {
                debug!("rendering difference of {numbers:?} to {}", path.display());

                let mut canvas =
                    Canvas::transparent(config.width(), config.height(), config.line_thickness)?;

                let quadrants =
                    Quadrant::for_positions(config.segment_length as i32, config.offset());
                for (segments, quadrant) in surviving.iter().zip(&quadrants) {
                    for segment in segments {
                        let ((x1, y1), (x2, y2)) = segment.endpoints(quadrant);
                        canvas.draw_line(x1, y1, x2, y2);
                    }
                }

                canvas.encode(path)
            })
    }
}

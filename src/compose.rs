//! Comparison-sheet composition
//!
//! Arranges rendered numeral bitmaps into larger sheets: side by side,
//! stacked, merged (overlapping stems), shifted, and a truncated cut of the
//! first sheets. The composer treats numeral PNGs as opaque fixed-size
//! bitmaps (2L wide, 4L tall) and owns all layout math; the drawing code
//! never leaks in here.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::imageops::{crop_imm, overlay};
use image::{Rgba, RgbaImage};
use log::info;

use crate::cache::ensure_directory;
use crate::config::GeneratorConfig;
use crate::error::RenderError;
use crate::numeral::NumeralRenderer;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Demonstration set of numeral groups for the comparison sheets.
pub const DEMO_GROUPS: &[&[u32]] = &[
    &[5038, 4245],
    &[5816, 5725],
    &[5626, 7119],
    &[3220, 5123],
    &[7457, 2254],
    &[7542, 7258],
    &[8149, 6445],
    &[112, 6754, 6050],
    &[6118, 1719],
    &[5032, 5213],
    &[8030, 59],
];

/// 1-based group indices whose first numeral is shifted in the
/// shifted-sheet variants.
const SHIFTED_LINES: &[usize] = &[3, 4, 6, 8, 9, 11];

/// Composes comparison sheets from rendered numerals.
///
/// Each composer instance writes into a fresh timestamped directory under
/// the configured sheet root, so repeated runs never clobber each other.
pub struct SheetComposer {
    config: GeneratorConfig,
    renderer: NumeralRenderer,
    sheet_directory: PathBuf,
}

impl SheetComposer {
    pub fn new(config: GeneratorConfig) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let sheet_directory = config.sheet_directory.join(timestamp.to_string());
        let renderer = NumeralRenderer::new(config.clone());
        Self {
            config,
            renderer,
            sheet_directory,
        }
    }

    pub fn sheet_directory(&self) -> &Path {
        &self.sheet_directory
    }

    /// Compose every sheet variant for the given groups, then the truncated
    /// cuts. Returns the directory holding the sheets.
    pub fn compose_all(&self, groups: &[&[u32]]) -> Result<PathBuf, RenderError> {
        ensure_directory(&self.sheet_directory)?;

        self.compose_difference(groups)?;
        self.compose_side_to_side_unmerged(groups)?;
        self.compose_side_to_side_merged(groups)?;
        self.compose_lines_merged(groups)?;
        self.compose_lines_unmerged(groups)?;
        self.compose_lines_shifted(groups, Shift::FullSpace, Overlap::Unmerged)?;
        self.compose_lines_shifted(groups, Shift::HalfSpace, Overlap::Unmerged)?;
        self.compose_lines_shifted(groups, Shift::FullSpace, Overlap::Merged)?;
        self.compose_lines_shifted(groups, Shift::HalfSpace, Overlap::Merged)?;
        self.truncate_first_sheets()?;

        Ok(self.sheet_directory.clone())
    }

    /// One difference image per group, in a single row.
    fn compose_difference(&self, groups: &[&[u32]]) -> Result<(), RenderError> {
        let (w1, _, t, _, p2) = self.metrics();
        let mut sheet = self.wide_base(groups.len())?;

        let mut x = 0i64;
        for group in groups {
            let numeral = self.load(&self.renderer.render_difference(group)?)?;
            overlay(&mut sheet, &numeral, x + p2, p2);
            x += w1 - t;
        }

        self.save(&sheet, "0-difference.png")
    }

    /// Every numeral of every group in one row, stems touching.
    fn compose_side_to_side_unmerged(&self, groups: &[&[u32]]) -> Result<(), RenderError> {
        let (w1, h1, t, p, p2) = self.metrics();
        let numbers: Vec<u32> = groups.iter().flat_map(|g| g.iter().copied()).collect();

        let width = w1 * numbers.len() as i64 - numbers.len() as i64 * t + p;
        let mut sheet = self.white_base(width, h1 + p)?;

        let mut x = 0i64;
        for number in numbers {
            let numeral = self.load(&self.renderer.render(number)?)?;
            overlay(&mut sheet, &numeral, x + p2, p2);
            x += w1 - t;
        }

        self.save(&sheet, "1-side-to-side-unmerged.png")
    }

    /// One column per group, the group's numerals blended on top of each
    /// other so shared strokes merge.
    fn compose_side_to_side_merged(&self, groups: &[&[u32]]) -> Result<(), RenderError> {
        let (w1, _, t, _, p2) = self.metrics();
        let mut sheet = self.wide_base(groups.len())?;

        let mut x = 0i64;
        for group in groups {
            for &number in *group {
                let numeral = self.load(&self.renderer.render(number)?)?;
                overlay(&mut sheet, &numeral, x + p2, p2);
            }
            x += w1 - t;
        }

        self.save(&sheet, "2-side-to-side-merged.png")
    }

    /// One row per group, the group's numerals blended at the same column.
    fn compose_lines_merged(&self, groups: &[&[u32]]) -> Result<(), RenderError> {
        let (w1, h1, t, p, p2) = self.metrics();
        let mut sheet = self.white_base(w1 + p, groups.len() as i64 * h1 + p)?;

        let mut y = 0i64;
        for group in groups {
            for &number in *group {
                let numeral = self.load(&self.renderer.render(number)?)?;
                overlay(&mut sheet, &numeral, p2, y + p2);
            }
            y += h1 - t;
        }

        self.save(&sheet, "3-multiple-lines-merged.png")
    }

    /// One row per group, numerals side by side within the row.
    fn compose_lines_unmerged(&self, groups: &[&[u32]]) -> Result<(), RenderError> {
        let (w1, h1, t, p, p2) = self.metrics();
        let mut sheet = self.white_base(w1 * 3 + p, groups.len() as i64 * h1 + p)?;

        let mut x = 0i64;
        let mut y = 0i64;
        for group in groups {
            for &number in *group {
                let numeral = self.load(&self.renderer.render(number)?)?;
                overlay(&mut sheet, &numeral, x + p2, y + p2);
                x += w1 - t;
            }
            x = 0;
            y += h1 - t;
        }

        self.save(&sheet, "4-multiple-lines-unmerged.png")
    }

    /// Row-per-group sheets where selected rows start a full or half
    /// numeral width to the right, in merged and unmerged flavors.
    fn compose_lines_shifted(
        &self,
        groups: &[&[u32]],
        shift: Shift,
        overlap: Overlap,
    ) -> Result<(), RenderError> {
        let (w1, h1, t, _, p2) = self.metrics();
        let mut sheet = self.tall_base(groups.len())?;

        let first_shift = match (shift, overlap) {
            (Shift::FullSpace, Overlap::Unmerged) => w1 - t,
            (Shift::HalfSpace, Overlap::Unmerged) => w1 / 2 - t / 2,
            (Shift::FullSpace, Overlap::Merged) => w1,
            (Shift::HalfSpace, Overlap::Merged) => w1 / 2,
        };

        let mut x = 0i64;
        let mut y = 0i64;
        for (line, group) in groups.iter().enumerate() {
            let shifted = SHIFTED_LINES.contains(&(line + 1));
            for (position, &number) in group.iter().enumerate() {
                let numeral = self.load(&self.renderer.render(number)?)?;

                match overlap {
                    Overlap::Unmerged => {
                        x += p2;
                        if position == 0 && shifted {
                            x += first_shift;
                        }
                        overlay(&mut sheet, &numeral, x, y + p2);
                        x += w1 - t - p2;
                    }
                    // The full-space variant accumulates x, so the shift
                    // applied to the first numeral carries across the whole
                    // line; the half-space variant restarts per numeral and
                    // shifts only the first one
                    Overlap::Merged => match shift {
                        Shift::FullSpace => {
                            x += p2 - t;
                            if position == 0 && shifted {
                                x += first_shift;
                            }
                            overlay(&mut sheet, &numeral, x, y + p2);
                            x += t - p2;
                        }
                        Shift::HalfSpace => {
                            x = p2;
                            if position == 0 && shifted {
                                x += first_shift;
                            }
                            overlay(&mut sheet, &numeral, x, y + p2);
                        }
                    },
                }
            }
            x = 0;
            y += h1 - t;
        }

        let name = match (shift, overlap) {
            (Shift::FullSpace, Overlap::Unmerged) => "5-multiple-lines-shifted-unmerged-full-space.png",
            (Shift::HalfSpace, Overlap::Unmerged) => "6-multiple-lines-shifted-unmerged-half-space.png",
            (Shift::FullSpace, Overlap::Merged) => "7-multiple-lines-shifted-merged-full-space.png",
            (Shift::HalfSpace, Overlap::Merged) => "8-multiple-lines-shifted-merged-half-space.png",
        };
        self.save(&sheet, name)
    }

    /// Cut the first 3 sheets (by name) down to their top and bottom digit
    /// bands, pasted touching.
    fn truncate_first_sheets(&self) -> Result<(), RenderError> {
        let (_, _, t, _, p2) = self.metrics();
        let length = self.config.segment_length as i64;
        let band = (length + t) as u32;

        let mut sheets: Vec<PathBuf> = fs::read_dir(&self.sheet_directory)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect();
        sheets.sort();

        for path in sheets.into_iter().take(3) {
            let source = self.load(&path)?;
            let width = source.width();
            let height = source.height() - 2 * self.config.segment_length;

            let top = crop_imm(&source, 0, p2 as u32, width, band).to_image();
            let bottom =
                crop_imm(&source, 0, (p2 + 3 * length + t) as u32, width, band).to_image();

            let mut sheet = self.white_base(width as i64, height as i64)?;
            overlay(&mut sheet, &top, 0, p2);
            overlay(&mut sheet, &bottom, 0, p2 + length + t);

            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("sheet")
                .to_string();
            self.save(&sheet, &format!("{name}-truncated.png"))?;
        }

        Ok(())
    }

    /// (numeral width, numeral height, line thickness, merge padding,
    /// half merge padding)
    fn metrics(&self) -> (i64, i64, i64, i64, i64) {
        (
            self.config.width() as i64,
            self.config.height() as i64,
            self.config.line_thickness as i64,
            self.config.merge_padding as i64,
            (self.config.merge_padding / 2) as i64,
        )
    }

    /// White sheet sized for one numeral row of `count` columns.
    fn wide_base(&self, count: usize) -> Result<RgbaImage, RenderError> {
        let (w1, h1, t, p, _) = self.metrics();
        let width = w1 * count as i64 - count as i64 * t + p;
        self.white_base(width, h1 + p)
    }

    /// White sheet sized for `lines` stacked rows, 6 numerals wide.
    fn tall_base(&self, lines: usize) -> Result<RgbaImage, RenderError> {
        let (w1, h1, _, p, _) = self.metrics();
        self.white_base(w1 * 6 + p, lines as i64 * h1 + p)
    }

    fn white_base(&self, width: i64, height: i64) -> Result<RgbaImage, RenderError> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::CanvasAllocation {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }
        Ok(RgbaImage::from_pixel(width as u32, height as u32, WHITE))
    }

    fn load(&self, path: &Path) -> Result<RgbaImage, RenderError> {
        Ok(image::open(path)?.into_rgba8())
    }

    fn save(&self, sheet: &RgbaImage, name: &str) -> Result<(), RenderError> {
        let path = self.sheet_directory.join(name);
        sheet.save(&path)?;
        info!("composed {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Shift {
    FullSpace,
    HalfSpace,
}

#[derive(Debug, Clone, Copy)]
enum Overlap {
    Merged,
    Unmerged,
}

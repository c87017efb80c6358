//! Raster canvas for numeral strokes
//!
//! A canvas is a scoped resource: created transparent, drawn on, encoded to
//! a PNG file, then dropped. Nothing is shared across render calls.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::RenderError;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A width x height RGBA buffer with a fixed stroke thickness.
pub struct Canvas {
    image: RgbaImage,
    thickness: u32,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn transparent(width: u32, height: u32, thickness: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::CanvasAllocation { width, height });
        }
        let image = RgbaImage::from_pixel(width, height, TRANSPARENT);
        Ok(Self { image, thickness })
    }

    /// Draw a black line between two points, endpoints inclusive, with the
    /// canvas stroke thickness applied uniformly.
    ///
    /// Axis-aligned lines expand perpendicular to their direction; other
    /// slopes walk the line and stamp a square brush at each point.
    /// Coordinates may fall outside the buffer; those pixels are clipped.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let half = (self.thickness / 2) as i32;
        let thickness = self.thickness as i32;

        if x1 == x2 {
            // Vertical: span `thickness` columns centered on x
            for x in (x1 - half)..(x1 - half + thickness) {
                for y in y1.min(y2)..=y1.max(y2) {
                    self.put_pixel(x, y);
                }
            }
        } else if y1 == y2 {
            // Horizontal: span `thickness` rows centered on y
            for y in (y1 - half)..(y1 - half + thickness) {
                for x in x1.min(x2)..=x1.max(x2) {
                    self.put_pixel(x, y);
                }
            }
        } else {
            self.draw_sloped(x1, y1, x2, y2);
        }
    }

    /// Bresenham walk stamping a thickness x thickness brush at each point.
    fn draw_sloped(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let half = (self.thickness / 2) as i32;
        let thickness = self.thickness as i32;

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let step_x = if x1 < x2 { 1 } else { -1 };
        let step_y = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            for bx in (x - half)..(x - half + thickness) {
                for by in (y - half)..(y - half + thickness) {
                    self.put_pixel(bx, by);
                }
            }

            if x == x2 && y == y2 {
                break;
            }
            let doubled = 2 * err;
            if doubled > -dy {
                err -= dy;
                x += step_x;
            }
            if doubled < dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, BLACK);
        }
    }

    /// Encode the canvas to a PNG file, alpha channel preserved.
    pub fn encode(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save(path)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }
}

//! Quadrant geometry
//!
//! A Cistercian numeral splits the area around its vertical stem into four
//! quadrants, one per decimal digit position: units top right, tens top
//! left, hundreds bottom right, thousands bottom left.
//!
//! See <https://en.wikipedia.org/wiki/Cistercian_numerals>.

/// Drawing region for one digit position.
///
/// (x1, y1) is the stem-side corner and (x2, y2) the outer corner; the
/// offsets are signed nudges (half the line thickness) pointing away from
/// the quadrant's edges so that strokes land inside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrant {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Quadrant {
    /// Units quadrant
    pub fn top_right(segment_length: i32, offset: i32) -> Self {
        Self {
            x1: segment_length,
            y1: 0,
            x2: segment_length * 2,
            y2: segment_length,
            x_offset: offset,
            y_offset: offset,
        }
    }

    /// Tens quadrant
    pub fn top_left(segment_length: i32, offset: i32) -> Self {
        Self {
            x1: segment_length,
            y1: 0,
            x2: 0,
            y2: segment_length,
            x_offset: -offset,
            y_offset: offset,
        }
    }

    /// Hundreds quadrant
    pub fn bottom_right(segment_length: i32, offset: i32) -> Self {
        Self {
            x1: segment_length,
            y1: segment_length * 4,
            x2: segment_length * 2,
            y2: segment_length * 3,
            x_offset: offset,
            y_offset: -offset,
        }
    }

    /// Thousands quadrant
    pub fn bottom_left(segment_length: i32, offset: i32) -> Self {
        Self {
            x1: segment_length,
            y1: segment_length * 4,
            x2: 0,
            y2: segment_length * 3,
            x_offset: -offset,
            y_offset: -offset,
        }
    }

    /// The four quadrants in digit-position order: units, tens, hundreds,
    /// thousands. Matches the order [`decompose`](crate::numeral::decompose)
    /// emits digits in.
    pub fn for_positions(segment_length: i32, offset: i32) -> [Quadrant; 4] {
        [
            Quadrant::top_right(segment_length, offset),
            Quadrant::top_left(segment_length, offset),
            Quadrant::bottom_right(segment_length, offset),
            Quadrant::bottom_left(segment_length, offset),
        ]
    }
}

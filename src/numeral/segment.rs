//! Segments and the digit lookup table
//!
//! Each decimal digit maps to a fixed set of strokes drawn inside one
//! quadrant; a digit's set combined with the quadrant geometry fully
//! determines the lines on the canvas.

use crate::numeral::Quadrant;

/// One stroke primitive drawable within a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
    DiagOne,
    DiagTwo,
    Right,
}

/// Digit -> segments lookup table, indexed by digit value
const SEGMENTS: [&[Segment]; 10] = [
    &[],
    &[Segment::Top],
    &[Segment::Bottom],
    &[Segment::DiagOne],
    &[Segment::DiagTwo],
    &[Segment::Top, Segment::DiagTwo],
    &[Segment::Right],
    &[Segment::Top, Segment::Right],
    &[Segment::Bottom, Segment::Right],
    &[Segment::Bottom, Segment::Right, Segment::Top],
];

/// The segments representing a single decimal digit.
///
/// Callers must only pass digits produced by [`decompose`]; values outside
/// [0, 9] are a contract violation.
pub fn segments_for(digit: u8) -> &'static [Segment] {
    SEGMENTS[digit as usize]
}

/// Split a number into its 4 decimal digits, least significant first:
/// units, tens, hundreds, thousands.
///
/// Digits beyond the fourth are discarded, so n and n + 10000 decompose
/// identically and alias onto the same image. Historical quirk of the
/// numeral system's 1-9999 range, kept as-is.
pub fn decompose(number: u32) -> [u8; 4] {
    [
        (number % 10) as u8,
        (number / 10 % 10) as u8,
        (number / 100 % 10) as u8,
        (number / 1000 % 10) as u8,
    ]
}

impl Segment {
    /// The single line this segment draws in the given quadrant, as
    /// ((x1, y1), (x2, y2)) endpoints.
    ///
    /// DiagTwo is intentionally asymmetric: its start is nudged by the
    /// quadrant's y-offset but its end by the x-offset, so the stroke both
    /// shortens and shifts. That is the numeral system's visual design,
    /// not an oversight.
    pub fn endpoints(&self, q: &Quadrant) -> ((i32, i32), (i32, i32)) {
        match self {
            Segment::Top => ((q.x1, q.y1 + q.y_offset), (q.x2, q.y1 + q.y_offset)),
            Segment::Bottom => ((q.x1, q.y2 + q.y_offset), (q.x2, q.y2 + q.y_offset)),
            Segment::DiagOne => ((q.x1, q.y1), (q.x2, q.y2)),
            Segment::DiagTwo => ((q.x1, q.y2 + q.y_offset), (q.x2 + q.x_offset, q.y1)),
            Segment::Right => ((q.x2 - q.x_offset, q.y1), (q.x2 - q.x_offset, q.y2)),
        }
    }
}

/// Per digit position, the segments that do NOT cancel out across the given
/// numbers. Returned in position order: units, tens, hundreds, thousands.
///
/// The fold is a pairwise toggle, not true N-way parity: a segment seen once
/// is traced, seen a second time it cancels, and a third occurrence does
/// nothing (it stays cancelled). The result is order-insensitive even
/// though callers key caches by input order.
pub fn difference_segments(numbers: &[u32]) -> [Vec<Segment>; 4] {
    let mut to_trace: [Vec<Segment>; 4] = Default::default();
    let mut ever_seen: [Vec<Segment>; 4] = Default::default();

    for &number in numbers {
        for (position, &digit) in decompose(number).iter().enumerate() {
            for &segment in segments_for(digit) {
                if ever_seen[position].contains(&segment) {
                    to_trace[position].retain(|&s| s != segment);
                } else {
                    to_trace[position].push(segment);
                    ever_seen[position].push(segment);
                }
            }
        }
    }

    to_trace
}

//! Rose curve and Maurer rose sampling.
//!
//! A rose curve is the polar curve `r = scale * sin(n * k)`. A Maurer rose
//! connects points of that curve taken every `d` degrees, which turns the
//! smooth petals into straight chords.
//!
//! Every function here is pure and returns origin-centered geometry; callers
//! translate it into canvas space.

use crate::float_types::{Real, degrees_to_radians};
use crate::geometry::{Line, Point};

/// Number of integer angle steps sampled per figure (one full turn).
pub const ANGLE_STEPS: i32 = 360;

/// Radius multiplier turning the unit rose into pixel space.
pub const ROSE_SCALE: Real = 500.0;

/// Point of the rose `r = scale * sin(n * k)` at polar angle `k` (radians).
#[inline]
pub fn rose_point(k: Real, n: i32, scale: Real) -> Point {
    let r = scale * (n as Real * k).sin();
    Point::new(r * k.cos(), r * k.sin())
}

/// Maurer chord for step `theta`: from the rose point at `theta * d` degrees
/// to the one at `(theta + 1) * d` degrees.
///
/// ```
/// # use maurer_rose::float_types::degrees_to_radians;
/// # use maurer_rose::rose::{maurer_segment, rose_point};
/// let chord = maurer_segment(1, 2, 29, 500.0);
/// assert_eq!(chord.start, rose_point(degrees_to_radians(29.0), 2, 500.0));
/// assert_eq!(chord.end, rose_point(degrees_to_radians(58.0), 2, 500.0));
/// ```
pub fn maurer_segment(theta: i32, n: i32, d: i32, scale: Real) -> Line {
    let d = d as Real;
    let k1 = degrees_to_radians(theta as Real * d);
    let k2 = degrees_to_radians((theta as Real + 1.0) * d);
    Line::new(rose_point(k1, n, scale), rose_point(k2, n, scale))
}

/// Piece of the continuous rose between `theta` and `theta + 1` degrees.
pub fn rose_segment(theta: i32, n: i32, scale: Real) -> Line {
    let k1 = degrees_to_radians(theta as Real);
    let k2 = degrees_to_radians(theta as Real + 1.0);
    Line::new(rose_point(k1, n, scale), rose_point(k2, n, scale))
}

/// All [`ANGLE_STEPS`] Maurer chords, in step order.
pub fn maurer_segments(n: i32, d: i32, scale: Real) -> impl Iterator<Item = Line> {
    (0..ANGLE_STEPS).map(move |theta| maurer_segment(theta, n, d, scale))
}

/// All [`ANGLE_STEPS`] rose curve pieces, in step order.
pub fn rose_segments(n: i32, scale: Real) -> impl Iterator<Item = Line> {
    (0..ANGLE_STEPS).map(move |theta| rose_segment(theta, n, scale))
}

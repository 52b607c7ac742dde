//! 2D points and line segments.
//!
//! Coordinates are generated around the origin and moved into canvas space
//! with [`translate_point`] / [`Line::translate`].

use crate::float_types::Real;
use nalgebra::{Point2, Translation2, Vector2};

/// A position in the plane.
pub type Point = Point2<Real>;

/// Returns `point` moved by `offset`.
#[inline]
pub fn translate_point(point: &Point, offset: &Vector2<Real>) -> Point {
    Translation2::from(*offset).transform_point(point)
}

/// A straight segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns a new Line with both endpoints moved by `offset`.
    pub fn translate(&self, offset: &Vector2<Real>) -> Self {
        Self::new(
            translate_point(&self.start, offset),
            translate_point(&self.end, offset),
        )
    }

    /// True if both endpoints have finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|c| c.is_finite())
    }

    pub fn length(&self) -> Real {
        nalgebra::distance(&self.start, &self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_both_endpoints() {
        let line = Line::new(Point::new(-1.0, 2.0), Point::new(3.0, -4.0));
        let moved = line.translate(&Vector2::new(10.0, 20.0));

        assert_eq!(moved.start, Point::new(9.0, 22.0));
        assert_eq!(moved.end, Point::new(13.0, 16.0));
        // original is untouched
        assert_eq!(line.start, Point::new(-1.0, 2.0));
    }

    #[test]
    fn length_and_finiteness() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < 1e-6);
        assert!(line.is_finite());

        let broken = Line::new(Point::new(Real::NAN, 0.0), Point::new(0.0, 0.0));
        assert!(!broken.is_finite());
    }
}

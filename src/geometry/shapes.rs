use serde::Serialize;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }
}

/// A closed polygon. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle from its top-left corner and size.
    ///
    /// Vertex order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn rectangle(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(vec![
            Point2::new(left, top),
            Point2::new(left + width, top),
            Point2::new(left + width, top + height),
            Point2::new(left, top + height),
        ])
    }

    /// Signed area; the sign gives the winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }
}

/// An open chain of line segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point2>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

/// A single line of annotation text, anchored at its baseline start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub anchor: Point2,
    pub font_size: f64,
    pub content: String,
}

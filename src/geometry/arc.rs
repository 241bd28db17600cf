use serde::Serialize;

use crate::math::arc_2d::{arc_center_from_endpoints, arc_subdivision_count, ellipse_point_at};
use crate::math::Point2;

/// An elliptical arc in endpoint form.
///
/// Matches the arc command of common vector formats so an emitter can pass
/// it through unchanged. `sweep = true` runs with increasing angle, which
/// in a y-down drawing frame is clockwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EllipticalArc {
    pub start: Point2,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse x-axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point2,
}

impl EllipticalArc {
    /// Half-ellipse bump over the chord `start`..`end`, rising `height`
    /// toward negative y.
    #[must_use]
    pub fn bump(start: Point2, end: Point2, height: f64) -> Self {
        Self {
            start,
            rx: (end - start).norm() * 0.5,
            ry: height,
            x_axis_rotation: 0.0,
            large_arc: false,
            sweep: true,
            end,
        }
    }

    /// Flattens the arc into points, within `tolerance` of the true curve.
    ///
    /// Degenerate arcs (zero radius or coincident endpoints) flatten to
    /// the straight chord.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let Some(center) = arc_center_from_endpoints(
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.rx,
            self.ry,
            self.x_axis_rotation.to_radians(),
            self.large_arc,
            self.sweep,
        ) else {
            return vec![self.start, self.end];
        };

        let n_sub = arc_subdivision_count(center.rx.max(center.ry), center.sweep.abs(), tolerance);
        let mut points = Vec::with_capacity(n_sub as usize + 1);
        points.push(self.start);
        for j in 1..n_sub {
            let t = f64::from(j) / f64::from(n_sub);
            let (x, y) = ellipse_point_at(&center, t);
            points.push(Point2::new(x, y));
        }
        points.push(self.end);
        points
    }
}

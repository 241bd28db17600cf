use crate::error::Result;
use crate::geometry::{Polygon, Primitive, PrimitiveGroup, Role, Shape, StrokeStyle};
use crate::math::Point2;
use crate::params::Rgba;

use super::context::LayoutContext;

const OUTLINE_STROKE: f64 = 0.1;

/// Builds the two board outlines.
///
/// Both are quadrilaterals wound far-low, nut-low, nut-high, far-high and
/// share their two nut corners.
pub struct BoardOutline<'a> {
    ctx: &'a LayoutContext<'a>,
}

impl<'a> BoardOutline<'a> {
    #[must_use]
    pub fn new(ctx: &'a LayoutContext<'a>) -> Self {
        Self { ctx }
    }

    /// Outline of the whole scale, bridge axis to nut.
    #[must_use]
    pub fn scale_polygon(&self) -> Polygon {
        self.polygon_from(0.0)
    }

    /// Outline of the drawn fingerboard, closing fret to nut.
    #[must_use]
    pub fn realized_polygon(&self) -> Polygon {
        self.polygon_from(self.ctx.realized_end_x())
    }

    /// Executes the operation, returning the scale and realized outline groups.
    ///
    /// # Errors
    ///
    /// Returns an error if a stroke style cannot be built.
    pub fn execute(&self) -> Result<(PrimitiveGroup, PrimitiveGroup)> {
        let mut scale = PrimitiveGroup::new("fretboard_scale_outline");
        scale.push(Primitive::new(
            "fretboard_scale_outline",
            Role::ScaleOutline,
            Shape::Polygon(self.scale_polygon()),
            StrokeStyle::new(OUTLINE_STROKE, Rgba::BLACK)?,
        ));

        let mut realized = PrimitiveGroup::new("fretboard_outline");
        realized.push(Primitive::new(
            "fretboard_outline",
            Role::RealizedOutline,
            Shape::Polygon(self.realized_polygon()),
            StrokeStyle::new(OUTLINE_STROKE, Rgba::RED)?,
        ));

        Ok((scale, realized))
    }

    fn polygon_from(&self, far_x: f64) -> Polygon {
        let taper = &self.ctx.taper;
        let scale = taper.scale();
        let (far_low, far_high) = taper.edges_at(far_x, self.ctx.midline);
        let (nut_low, nut_high) = taper.edges_at(scale, self.ctx.midline);
        Polygon::new(vec![
            Point2::new(far_x, far_low),
            Point2::new(scale, nut_low),
            Point2::new(scale, nut_high),
            Point2::new(far_x, far_high),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::fret_scale::distance_from_nut;
    use crate::params::{FretboardOptions, ParameterSet};
    use approx::assert_relative_eq;

    fn params() -> ParameterSet {
        ParameterSet::from_options(&FretboardOptions::default()).unwrap()
    }

    #[test]
    fn scale_outline_spans_bridge_to_nut() {
        let params = params();
        let ctx = LayoutContext::new(&params).unwrap();
        let poly = BoardOutline::new(&ctx).scale_polygon();
        assert_eq!(poly.points.len(), 4);
        assert_relative_eq!(poly.points[0].x, 0.0);
        assert_relative_eq!(poly.points[0].y, 50.0 - 28.0);
        assert_relative_eq!(poly.points[1].x, 650.0);
        assert_relative_eq!(poly.points[1].y, 50.0 - 21.5, epsilon = 1e-9);
        assert_relative_eq!(poly.points[2].y, 50.0 + 21.5, epsilon = 1e-9);
        assert_relative_eq!(poly.points[3].y, 50.0 + 28.0);
    }

    #[test]
    fn realized_outline_closes_at_boundary_fret() {
        let params = params();
        let ctx = LayoutContext::new(&params).unwrap();
        let poly = BoardOutline::new(&ctx).realized_polygon();

        let far_x = 650.0 - distance_from_nut(650.0, 23);
        let half = ctx.taper.half_width_from_bridge(far_x);
        assert_relative_eq!(poly.points[0].x, far_x, epsilon = 1e-9);
        assert_relative_eq!(poly.points[3].x, far_x, epsilon = 1e-9);
        assert_relative_eq!(poly.points[3].y - poly.points[0].y, 2.0 * half, epsilon = 1e-9);
    }

    #[test]
    fn outlines_share_nut_corners_and_winding() {
        let params = params();
        let ctx = LayoutContext::new(&params).unwrap();
        let (scale, realized) = BoardOutline::new(&ctx).execute().unwrap();
        let a = scale.primitives[0].as_polygon().unwrap();
        let b = realized.primitives[0].as_polygon().unwrap();
        assert_eq!(a.points[1], b.points[1]);
        assert_eq!(a.points[2], b.points[2]);
        assert_eq!(a.signed_area().signum(), b.signed_area().signum());
        assert!(a.signed_area().abs() > b.signed_area().abs());
    }

    #[test]
    fn outline_styles() {
        let params = params();
        let ctx = LayoutContext::new(&params).unwrap();
        let (scale, realized) = BoardOutline::new(&ctx).execute().unwrap();
        assert_eq!(scale.label, "fretboard_scale_outline");
        assert_eq!(scale.primitives[0].style.color(), Rgba::BLACK);
        assert_eq!(realized.primitives[0].id, "fretboard_outline");
        assert_eq!(realized.primitives[0].role, Role::RealizedOutline);
        assert_eq!(realized.primitives[0].style.color(), Rgba::RED);
    }
}

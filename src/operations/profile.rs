use crate::error::{GeometryError, Result};
use crate::geometry::{
    EllipticalArc, Polygon, Primitive, PrimitiveGroup, Role, Segment, Shape, StrokeStyle,
};
use crate::math::Point2;
use crate::params::Rgba;

use super::context::LayoutContext;

const PROFILE_STROKE: f64 = 0.1;

/// Height of a radiused surface above its edges, across `half_width`.
///
/// # Errors
///
/// Returns [`GeometryError::RadiusTooSmall`] if the radius cannot span the
/// half-width.
pub fn radius_drop(side: &'static str, radius: f64, half_width: f64) -> Result<f64> {
    let radicand = radius * radius - half_width * half_width;
    if radicand < 0.0 {
        return Err(GeometryError::RadiusTooSmall {
            side,
            radius,
            half_width,
        }
        .into());
    }
    Ok(radius - radicand.sqrt())
}

/// Lateral cross-section of the board, drawn below the top view.
pub struct SideProfile<'a> {
    ctx: &'a LayoutContext<'a>,
}

impl<'a> SideProfile<'a> {
    #[must_use]
    pub fn new(ctx: &'a LayoutContext<'a>) -> Self {
        Self { ctx }
    }

    /// Vertical offset of the profile, clear of the top view.
    #[must_use]
    pub fn y_offset(&self) -> f64 {
        self.ctx.midline.y() * 2.0
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::RadiusTooSmall`] if the nut or bridge
    /// radius is smaller than the corresponding half-width.
    pub fn execute(&self) -> Result<PrimitiveGroup> {
        let params = self.ctx.params;
        let scale = self.ctx.taper.scale();
        let y_offset = self.y_offset();
        let start_x = self.ctx.realized_end_x();
        let thin = StrokeStyle::new(PROFILE_STROKE, Rgba::BLACK)?;

        let bridge_drop = radius_drop("bridge", params.bridge_radius, params.bridge_width / 2.0)?;
        let nut_drop = radius_drop("nut", params.nut_radius, params.nut_width / 2.0)?;

        let mut group = PrimitiveGroup::new("side_view");
        group.push(Primitive::new(
            "side_outline",
            Role::SideProfile,
            Shape::Polygon(Polygon::rectangle(
                start_x,
                y_offset,
                scale - start_x,
                params.fretboard_thickness,
            )),
            thin.clone(),
        ));
        group.push(Primitive::new(
            "radiused_line",
            Role::SideProfile,
            Shape::Segment(Segment::new(
                Point2::new(start_x, y_offset + bridge_drop),
                Point2::new(scale, y_offset + nut_drop),
            )),
            thin.clone().with_dash(vec![2.0, 1.0]),
        ));

        let half_crown = params.frets_crown_width / 2.0;
        for index in 1..=params.frets {
            let x = self.ctx.taper.fret_x(index);
            group.push(Primitive::new(
                format!("side_fret_{index}"),
                Role::SideProfile,
                Shape::Arc(EllipticalArc::bump(
                    Point2::new(x - half_crown, y_offset),
                    Point2::new(x + half_crown, y_offset),
                    params.frets_crown_height,
                )),
                thin.clone(),
            ));
        }
        Ok(group)
    }
}

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Primitive, PrimitiveGroup, Role, Segment, Shape, StrokeStyle};
use crate::math::Point2;
use crate::params::Rgba;

use super::context::LayoutContext;

/// Stroke width of the boundary marker lines.
const BOUNDARY_STROKE: f64 = 0.1;

/// What a fret index stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretKind {
    /// Index 0: the nut line, closing the outline.
    Nut,
    /// A physical fret.
    Real,
    /// Index `frets + 1`: where the drawn board ends.
    Closure,
}

impl FretKind {
    #[must_use]
    pub fn is_real(self) -> bool {
        self == Self::Real
    }
}

/// A fret slot across the board.
#[derive(Debug, Clone, PartialEq)]
pub struct FretSlot {
    pub index: u32,
    pub kind: FretKind,
    /// Longitudinal coordinate, 0 at the bridge axis.
    pub x: f64,
    /// Slot centerline from the low board edge to the high one.
    pub line: Segment,
}

impl FretSlot {
    /// Distance from the nut to this slot.
    #[must_use]
    pub fn distance_from_nut(&self, scale: f64) -> f64 {
        scale - self.x
    }
}

/// Output of [`FretLayout`].
#[derive(Debug, Clone)]
pub struct FretLayoutOutput {
    pub slots: Vec<FretSlot>,
    pub tangs: PrimitiveGroup,
    /// `None` when custom widths are ignored.
    pub crowns: Option<PrimitiveGroup>,
}

/// Lays out fret indices `0..=frets + 1`, strictly in increasing order.
pub struct FretLayout<'a> {
    ctx: &'a LayoutContext<'a>,
}

impl<'a> FretLayout<'a> {
    #[must_use]
    pub fn new(ctx: &'a LayoutContext<'a>) -> Self {
        Self { ctx }
    }

    /// Computes the slot record of every fret index.
    #[must_use]
    pub fn slots(&self) -> Vec<FretSlot> {
        let closing = self.ctx.closing_fret();
        (0..=closing)
            .map(|index| {
                let kind = match index {
                    0 => FretKind::Nut,
                    i if i == closing => FretKind::Closure,
                    _ => FretKind::Real,
                };
                let x = self.ctx.taper.fret_x(index);
                let (low, high) = self.ctx.taper.edges_at(x, self.ctx.midline);
                let slot = FretSlot {
                    index,
                    kind,
                    x,
                    line: Segment::new(Point2::new(x, low), Point2::new(x, high)),
                };
                debug!(
                    fret = index,
                    distance_to_nut = slot.distance_from_nut(self.ctx.taper.scale()),
                    "fret slot"
                );
                slot
            })
            .collect()
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a stroke style cannot be built.
    pub fn execute(&self) -> Result<FretLayoutOutput> {
        let params = self.ctx.params;
        let slots = self.slots();

        let real_tang = StrokeStyle::new(params.frets_tang_width, Rgba::GREY)?;
        let boundary_tang = StrokeStyle::new(BOUNDARY_STROKE, Rgba::RED)?;
        let crown = StrokeStyle::new(params.frets_crown_width, params.frets_color)?;

        let mut tangs = PrimitiveGroup::new("fret_tangs");
        let mut crowns = PrimitiveGroup::new("fret_crowns");
        for slot in &slots {
            if slot.kind.is_real() && !params.ignore_custom_width {
                crowns.push(Primitive::new(
                    format!("fret_crown_{}", slot.index),
                    Role::FretCrown,
                    Shape::Segment(slot.line.clone()),
                    crown.clone(),
                ));
            }
            let style = if slot.kind.is_real() {
                real_tang.clone()
            } else {
                boundary_tang.clone()
            };
            tangs.push(Primitive::new(
                format!("fret_tang_{}", slot.index),
                Role::FretTang,
                Shape::Segment(slot.line.clone()),
                style,
            ));
        }

        Ok(FretLayoutOutput {
            slots,
            tangs,
            crowns: (!params.ignore_custom_width).then_some(crowns),
        })
    }
}

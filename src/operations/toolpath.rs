use tracing::{debug, warn};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::Result;
use crate::geometry::{Polyline, Primitive, PrimitiveGroup, Role, Shape, StrokeStyle};
use crate::math::Point2;
use crate::params::{Rgba, ToolpathParams};

use super::frets::FretSlot;

const TOOLPATH_STROKE: f64 = 0.001;

/// Outcome of checking whether slot toolpaths can be generated this run.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolpathPlan {
    /// Toolpaths were not requested.
    Off,
    /// The tool cannot fit the slot; the feature is off for this run.
    Disabled(Diagnostic),
    /// Every slot is cleared in `passes` passes.
    Active { passes: u32 },
}

/// Number of tool passes needed to clear a slot: one full-width pass plus
/// enough stepover advances to cover the remaining width.
#[must_use]
pub fn pass_count(params: &ToolpathParams) -> u32 {
    let passes = (1.0 + (params.slot_width - params.tool_diameter) / params.step()).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let passes = passes.max(1.0) as u32;
    passes
}

/// Zig-zag milling paths clearing each real fret slot.
pub struct SlotToolpath<'a> {
    params: &'a ToolpathParams,
}

impl<'a> SlotToolpath<'a> {
    #[must_use]
    pub fn new(params: &'a ToolpathParams) -> Self {
        Self { params }
    }

    /// Decides whether toolpaths are generated this run.
    #[must_use]
    pub fn plan(&self) -> ToolpathPlan {
        let p = self.params;
        if !p.draw {
            return ToolpathPlan::Off;
        }
        if p.tool_diameter > p.slot_width {
            warn!(
                tool_diameter = p.tool_diameter,
                slot_width = p.slot_width,
                "tool wider than slot, toolpaths disabled"
            );
            return ToolpathPlan::Disabled(Diagnostic::new(
                DiagnosticKind::ToolpathDisabled,
                format!(
                    "tool diameter {} > slot width {}; fret slot toolpaths disabled",
                    p.tool_diameter, p.slot_width
                ),
            ));
        }
        let passes = pass_count(p);
        debug!(passes, "fret slot toolpath passes");
        ToolpathPlan::Active { passes }
    }

    /// Builds the zig-zag path for one slot.
    ///
    /// Pass 1 runs low to high at the near edge of the slot; later passes
    /// alternate direction and step toward the far edge, never letting the
    /// tool cut past it.
    #[must_use]
    pub fn path(&self, slot: &FretSlot, passes: u32) -> Polyline {
        let p = self.params;
        let low = slot.line.start.y + p.slot_margin;
        let high = slot.line.end.y - p.slot_margin;
        let near = slot.x - p.slot_width / 2.0;
        let far_limit = slot.x + p.slot_width / 2.0 - p.tool_diameter / 2.0;

        let first_x = near + p.tool_diameter / 2.0;
        let mut points = vec![Point2::new(first_x, low), Point2::new(first_x, high)];
        for pass in 2..=passes {
            let (from, to) = if pass % 2 == 0 { (high, low) } else { (low, high) };
            let x = (near + p.step() * f64::from(pass)).min(far_limit);
            points.push(Point2::new(x, from));
            points.push(Point2::new(x, to));
        }
        debug!(fret = slot.index, ?points, "fret slot toolpath");
        Polyline::new(points)
    }

    /// Executes the operation over `slots`, skipping boundary markers.
    ///
    /// Returns no group when the plan is not [`ToolpathPlan::Active`].
    ///
    /// # Errors
    ///
    /// Returns an error if a stroke style cannot be built.
    pub fn execute(&self, slots: &[FretSlot]) -> Result<(Option<PrimitiveGroup>, Option<Diagnostic>)> {
        let passes = match self.plan() {
            ToolpathPlan::Off => return Ok((None, None)),
            ToolpathPlan::Disabled(diagnostic) => return Ok((None, Some(diagnostic))),
            ToolpathPlan::Active { passes } => passes,
        };

        let style = StrokeStyle::new(TOOLPATH_STROKE, Rgba::ORANGE)?;
        let mut group = PrimitiveGroup::new("frets_toolpath_lines");
        for slot in slots.iter().filter(|s| s.kind.is_real()) {
            group.push(Primitive::new(
                format!("toolpath_fret_{}", slot.index),
                Role::Toolpath,
                Shape::Polyline(self.path(slot, passes)),
                style.clone(),
            ));
        }
        Ok((Some(group), None))
    }
}

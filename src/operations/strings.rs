use tracing::{debug, warn};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::Result;
use crate::geometry::{Primitive, PrimitiveGroup, Role, Segment, Shape, StrokeStyle};
use crate::math::Point2;
use crate::params::{Gauges, DEFAULT_GAUGE};

use super::context::LayoutContext;

/// Converts a gauge (thousandths of an inch) to a width in millimeters.
#[must_use]
pub fn gauge_to_mm(gauge: f64) -> f64 {
    gauge / 100.0 * 2.54
}

/// One string, bridge to nut.
#[derive(Debug, Clone, PartialEq)]
pub struct StringPath {
    pub slot: usize,
    pub segment: Segment,
    pub gauge: f64,
}

impl StringPath {
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        gauge_to_mm(self.gauge)
    }
}

/// Output of [`StringLayout`].
#[derive(Debug, Clone)]
pub struct StringLayoutOutput {
    pub group: PrimitiveGroup,
    pub diagnostic: Option<Diagnostic>,
}

/// Lays out every string between its bridge and nut positions.
///
/// Slot 0 is the low edge of the layout and carries the thickest gauge.
pub struct StringLayout<'a> {
    ctx: &'a LayoutContext<'a>,
}

impl<'a> StringLayout<'a> {
    #[must_use]
    pub fn new(ctx: &'a LayoutContext<'a>) -> Self {
        Self { ctx }
    }

    /// Resolves the gauge of every slot, applying the uniform fallback.
    ///
    /// Returns the gauges and, if the fallback was taken because the list
    /// was unusable, a diagnostic explaining why.
    #[must_use]
    pub fn resolve_gauges(&self) -> (Gauges, Option<Diagnostic>) {
        let params = self.ctx.params;
        let count = params.strings as usize;
        if params.ignore_custom_width {
            return (Gauges::uniform(DEFAULT_GAUGE, count), None);
        }
        match Gauges::parse(&params.string_gauges, count) {
            Ok(gauges) => {
                debug!(gauges = %gauges, "string gauges");
                (gauges, None)
            }
            Err(rejection) => {
                warn!(%rejection, "falling back to uniform string gauge {DEFAULT_GAUGE}");
                let diagnostic = Diagnostic::new(
                    DiagnosticKind::GaugeFallback,
                    format!("{rejection}; using gauge {DEFAULT_GAUGE} for every string"),
                );
                (Gauges::uniform(DEFAULT_GAUGE, count), Some(diagnostic))
            }
        }
    }

    /// Computes every string path with the given gauges.
    #[must_use]
    pub fn paths(&self, gauges: &Gauges) -> Vec<StringPath> {
        let params = self.ctx.params;
        let mid = self.ctx.midline.y();
        let scale = self.ctx.taper.scale();
        let gaps = f64::from(params.strings - 1);
        let nut_pitch = params.nut_string_space / gaps;
        let bridge_start = mid - params.bridge_string_space * gaps / 2.0;
        let nut_start = mid - params.nut_string_space / 2.0;

        (0..params.strings)
            .map(|i| {
                let slot = i as usize;
                let k = f64::from(i);
                let bridge = Point2::new(0.0, bridge_start + params.bridge_string_space * k);
                let nut = Point2::new(scale, nut_start + nut_pitch * k);
                StringPath {
                    slot,
                    segment: Segment::new(bridge, nut),
                    gauge: gauges.get(slot).unwrap_or(DEFAULT_GAUGE),
                }
            })
            .collect()
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a stroke style cannot be built.
    pub fn execute(&self) -> Result<StringLayoutOutput> {
        let params = self.ctx.params;
        let (gauges, diagnostic) = self.resolve_gauges();

        let mut group = PrimitiveGroup::new("strings");
        for path in self.paths(&gauges) {
            let style = StrokeStyle::new(path.stroke_width(), params.strings_color)?
                .with_opacity(params.strings_color.opacity());
            group.push(Primitive::new(
                format!("string_{}", path.slot + 1),
                Role::String,
                Shape::Segment(path.segment),
                style,
            ));
        }
        Ok(StringLayoutOutput { group, diagnostic })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::params::{FretboardOptions, ParameterSet, Rgba};
    use approx::assert_relative_eq;

    fn layout(options: &FretboardOptions) -> StringLayoutOutput {
        let params = ParameterSet::from_options(options).unwrap();
        let ctx = LayoutContext::new(&params).unwrap();
        StringLayout::new(&ctx).execute().unwrap()
    }

    #[test]
    fn strings_are_centered_at_both_ends() {
        let params = ParameterSet::from_options(&FretboardOptions::default()).unwrap();
        let ctx = LayoutContext::new(&params).unwrap();
        let layout = StringLayout::new(&ctx);
        let paths = layout.paths(&Gauges::uniform(10.0, 6));
        assert_eq!(paths.len(), 6);

        // Bridge: 10.5 mm apart around y=50.
        assert_relative_eq!(paths[0].segment.start.y, 50.0 - 26.25);
        assert_relative_eq!(paths[5].segment.start.y, 50.0 + 26.25);
        assert_relative_eq!(paths[1].segment.start.y - paths[0].segment.start.y, 10.5);

        // Nut: outer strings 35 mm apart.
        assert_relative_eq!(paths[0].segment.end.y, 50.0 - 17.5);
        assert_relative_eq!(paths[5].segment.end.y, 50.0 + 17.5, epsilon = 1e-9);
        assert_relative_eq!(paths[0].segment.start.x, 0.0);
        assert_relative_eq!(paths[0].segment.end.x, 650.0);
    }

    #[test]
    fn thickest_gauge_goes_to_slot_zero() {
        let out = layout(&FretboardOptions::default());
        assert!(out.diagnostic.is_none());
        let widths: Vec<f64> = out.group.primitives.iter().map(|p| p.style.width()).collect();
        assert_relative_eq!(widths[0], 46.0 / 100.0 * 2.54, epsilon = 1e-12);
        assert_relative_eq!(widths[5], 10.0 / 100.0 * 2.54, epsilon = 1e-12);
        assert_eq!(out.group.primitives[0].id, "string_1");
        assert_eq!(out.group.primitives[5].id, "string_6");
    }

    #[test]
    fn short_gauge_list_falls_back_with_diagnostic() {
        let out = layout(&FretboardOptions {
            strings_gauges: "10,13,17,26,36".to_owned(),
            ..FretboardOptions::default()
        });
        let diagnostic = out.diagnostic.unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::GaugeFallback);
        assert_eq!(out.group.len(), 6);
        for p in &out.group.primitives {
            assert_relative_eq!(p.style.width(), 0.254, epsilon = 1e-12);
        }
    }

    #[test]
    fn unparsable_gauge_falls_back_with_diagnostic() {
        let out = layout(&FretboardOptions {
            strings_gauges: "10,13,17,2x,36,46".to_owned(),
            ..FretboardOptions::default()
        });
        assert!(out.diagnostic.unwrap().message.contains("\"2x\""));
        assert!(out
            .group
            .primitives
            .iter()
            .all(|p| (p.style.width() - 0.254).abs() < 1e-12));
    }

    #[test]
    fn ignore_custom_width_forces_default_silently() {
        let out = layout(&FretboardOptions {
            ignore_custom_width: true,
            strings_gauges: "nonsense".to_owned(),
            ..FretboardOptions::default()
        });
        assert!(out.diagnostic.is_none());
        assert!(out
            .group
            .primitives
            .iter()
            .all(|p| (p.style.width() - 0.254).abs() < 1e-12));
    }

    #[test]
    fn string_color_and_opacity_come_from_packed_color() {
        let out = layout(&FretboardOptions {
            strings_color: Rgba(0x3366_9980),
            ..FretboardOptions::default()
        });
        let style = &out.group.primitives[0].style;
        assert_eq!(style.color().hex(), "#336699");
        assert_relative_eq!(style.opacity(), 128.0 / 255.0);
    }

    #[test]
    fn two_strings_sit_on_the_nut_spacing_edges() {
        let params = ParameterSet::from_options(&FretboardOptions {
            strings: 2,
            strings_gauges: String::new(),
            ..FretboardOptions::default()
        })
        .unwrap();
        let ctx = LayoutContext::new(&params).unwrap();
        let paths = StringLayout::new(&ctx).paths(&Gauges::uniform(10.0, 2));
        assert_relative_eq!(paths[1].segment.end.y - paths[0].segment.end.y, 35.0);
    }
}

use serde::Serialize;
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::geometry::PrimitiveGroup;
use crate::params::ParameterSet;

use super::context::LayoutContext;
use super::frets::FretLayout;
use super::outline::BoardOutline;
use super::profile::SideProfile;
use super::strings::StringLayout;
use super::summary::ParamsSummary;
use super::toolpath::SlotToolpath;

/// Complete result of one generation request.
#[derive(Debug, Clone, Serialize)]
pub struct Fretboard {
    pub midline: f64,
    pub angle_tangent: f64,
    pub bridge_width: f64,
    /// Layers in drawing order.
    pub groups: Vec<PrimitiveGroup>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Fretboard {
    /// Looks up a layer by label.
    #[must_use]
    pub fn group(&self, label: &str) -> Option<&PrimitiveGroup> {
        self.groups.iter().find(|g| g.label == label)
    }
}

/// Runs every layout operation in dependency order.
pub struct GenerateFretboard<'a> {
    params: &'a ParameterSet,
}

impl<'a> GenerateFretboard<'a> {
    #[must_use]
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params }
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns an error on a fatal inconsistency: non-positive scale, or a
    /// side-profile radius smaller than its half-width.
    pub fn execute(&self) -> Result<Fretboard> {
        let params = self.params;
        let ctx = LayoutContext::new(params)?;
        let mut diagnostics = Vec::new();
        let mut groups = Vec::new();

        let (scale_outline, realized_outline) = BoardOutline::new(&ctx).execute()?;
        groups.push(scale_outline);
        groups.push(realized_outline);

        let strings = StringLayout::new(&ctx).execute()?;
        diagnostics.extend(strings.diagnostic);

        let frets = FretLayout::new(&ctx).execute()?;
        groups.push(frets.tangs);
        groups.extend(frets.crowns);
        groups.push(strings.group);

        let (toolpaths, toolpath_diagnostic) =
            SlotToolpath::new(&params.toolpath).execute(&frets.slots)?;
        diagnostics.extend(toolpath_diagnostic);
        groups.extend(toolpaths);

        if params.draw_profile {
            groups.push(SideProfile::new(&ctx).execute()?);
        }

        groups.push(ParamsSummary::new(params.source()).execute()?);

        debug!(
            groups = groups.len(),
            diagnostics = diagnostics.len(),
            "fretboard generated"
        );
        Ok(Fretboard {
            midline: ctx.midline.y(),
            angle_tangent: ctx.taper.angle_tangent(),
            bridge_width: params.bridge_width,
            groups,
            diagnostics,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::geometry::Role;
    use crate::params::{FretboardOptions, Measure};
    use approx::assert_relative_eq;

    fn generate(options: &FretboardOptions) -> Result<Fretboard> {
        let params = ParameterSet::from_options(options)?;
        GenerateFretboard::new(&params).execute()
    }

    fn labels(board: &Fretboard) -> Vec<&'static str> {
        board.groups.iter().map(|g| g.label).collect()
    }

    #[test]
    fn reference_guitar() {
        let options = FretboardOptions {
            scale: Measure::mm(650.0),
            strings: 6,
            nut_width: Measure::mm(43.0),
            nut_string_space: Measure::mm(35.0),
            bridge_width: Measure::mm(56.0),
            ignore_bridge_width: false,
            bridge_string_space: Measure::mm(10.5),
            frets: 22,
            ignore_custom_width: false,
            strings_gauges: "10,13,17,26,36,46".to_owned(),
            ..FretboardOptions::default()
        };
        let board = generate(&options).unwrap();

        assert_relative_eq!(board.midline, 50.0);
        assert_relative_eq!(board.angle_tangent, 0.01, epsilon = 1e-12);
        assert!(board.diagnostics.is_empty());

        let tangs = board.group("fret_tangs").unwrap();
        assert_eq!(tangs.len(), 24);
        assert_eq!(tangs.primitives[0].id, "fret_tang_0");
        assert_eq!(tangs.primitives[23].id, "fret_tang_23");
        assert_relative_eq!(tangs.primitives[0].style.width(), 0.1);
        assert_relative_eq!(tangs.primitives[23].style.width(), 0.1);

        let crowns = board.group("fret_crowns").unwrap();
        assert_eq!(crowns.len(), 22);

        let strings = board.group("strings").unwrap();
        assert_eq!(strings.len(), 6);
        assert_relative_eq!(strings.primitives[0].style.width(), 1.1684, epsilon = 1e-9);

        assert_eq!(
            labels(&board),
            vec![
                "fretboard_scale_outline",
                "fretboard_outline",
                "fret_tangs",
                "fret_crowns",
                "strings",
                "params_reminder",
            ]
        );
    }

    #[test]
    fn realized_outline_matches_taper_at_closing_fret() {
        let board = generate(&FretboardOptions::default()).unwrap();
        let outline = board.group("fretboard_outline").unwrap().primitives[0]
            .as_polygon()
            .unwrap();
        let closing = board.group("fret_tangs").unwrap().primitives[23]
            .as_segment()
            .unwrap();
        assert_eq!(outline.points[0], closing.start);
        assert_eq!(outline.points[3], closing.end);
    }

    #[test]
    fn gauge_mismatch_is_reported_not_fatal() {
        let board = generate(&FretboardOptions {
            strings_gauges: "10,13,17,26,36".to_owned(),
            ..FretboardOptions::default()
        })
        .unwrap();
        assert_eq!(board.diagnostics.len(), 1);
        assert_eq!(board.diagnostics[0].kind, DiagnosticKind::GaugeFallback);
        let strings = board.group("strings").unwrap();
        assert!(strings
            .primitives
            .iter()
            .all(|p| (p.style.width() - 0.254).abs() < 1e-12));
    }

    #[test]
    fn oversized_tool_disables_only_toolpaths() {
        let board = generate(&FretboardOptions {
            ftp_tool_draw: true,
            ftp_tool_diameter: Measure::mm(1.0),
            ftp_slot_width: Measure::mm(0.6),
            draw_profile: true,
            ..FretboardOptions::default()
        })
        .unwrap();
        assert!(board.group("frets_toolpath_lines").is_none());
        assert_eq!(board.diagnostics.len(), 1);
        assert_eq!(board.diagnostics[0].kind, DiagnosticKind::ToolpathDisabled);
        for label in [
            "fretboard_scale_outline",
            "fretboard_outline",
            "fret_tangs",
            "fret_crowns",
            "strings",
            "side_view",
            "params_reminder",
        ] {
            assert!(board.group(label).is_some(), "missing {label}");
        }
    }

    #[test]
    fn all_optional_layers() {
        let board = generate(&FretboardOptions {
            ftp_tool_draw: true,
            draw_profile: true,
            ..FretboardOptions::default()
        })
        .unwrap();
        assert_eq!(
            labels(&board),
            vec![
                "fretboard_scale_outline",
                "fretboard_outline",
                "fret_tangs",
                "fret_crowns",
                "strings",
                "frets_toolpath_lines",
                "side_view",
                "params_reminder",
            ]
        );
        let toolpaths = board.group("frets_toolpath_lines").unwrap();
        assert_eq!(toolpaths.len(), 22);
        assert!(toolpaths.with_role(Role::Toolpath).all(|p| p.as_polyline().is_some()));
    }

    #[test]
    fn ignore_custom_width_keeps_uniform_strings_and_drops_crowns() {
        let board = generate(&FretboardOptions {
            ignore_custom_width: true,
            ..FretboardOptions::default()
        })
        .unwrap();
        assert!(board.group("fret_crowns").is_none());
        assert_eq!(board.group("strings").unwrap().len(), 6);
    }

    #[test]
    fn inconsistent_radius_aborts_generation() {
        let result = generate(&FretboardOptions {
            draw_profile: true,
            bridge_radius: Measure::mm(10.0),
            ..FretboardOptions::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn derived_bridge_width_moves_midline() {
        let board = generate(&FretboardOptions {
            ignore_bridge_width: true,
            ..FretboardOptions::default()
        })
        .unwrap();
        assert_relative_eq!(board.bridge_width, 60.5, epsilon = 1e-12);
        assert_relative_eq!(board.midline, 60.0);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let options = FretboardOptions {
            strings_gauges: "bad".to_owned(),
            ftp_tool_draw: true,
            draw_profile: true,
            ..FretboardOptions::default()
        };
        let a = serde_json::to_string(&generate(&options).unwrap()).unwrap();
        let b = serde_json::to_string(&generate(&options).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}

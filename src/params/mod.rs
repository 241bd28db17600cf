//! Input options and their normalized, validated form.

pub mod color;
pub mod gauges;
pub mod options;
pub mod schema;
pub mod units;

pub use color::Rgba;
pub use gauges::{GaugeRejection, Gauges, DEFAULT_GAUGE};
pub use options::FretboardOptions;
pub use units::{Measure, Unit};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Largest accepted fret count. Keeps the boundary index `frets + 1` and
/// the per-fret layout small.
pub const MAX_FRETS: u32 = 100;

/// Slot-milling parameters, all lengths in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolpathParams {
    pub draw: bool,
    pub tool_diameter: f64,
    /// Percent of the tool diameter advanced between passes.
    pub stepover_percent: u32,
    pub slot_width: f64,
    /// Distance kept clear of the board edge at each end of a slot.
    pub slot_margin: f64,
}

impl ToolpathParams {
    /// Horizontal advance between two passes.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.tool_diameter * f64::from(self.stepover_percent) / 100.0
    }
}

/// Normalized generation parameters.
///
/// Built once per request by [`ParameterSet::from_options`]; every length
/// is in millimeters and every fatal inconsistency has been rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub scale: f64,
    pub fretboard_thickness: f64,
    pub strings: u32,
    pub strings_color: Rgba,
    pub nut_radius: f64,
    pub nut_width: f64,
    pub nut_string_space: f64,
    pub bridge_radius: f64,
    /// Effective bridge width, derived when `bridge_width_derived` is set.
    pub bridge_width: f64,
    pub bridge_width_derived: bool,
    pub bridge_string_space: f64,
    pub frets: u32,
    pub frets_color: Rgba,
    /// Raw gauge entries as given, thinnest string first.
    pub string_gauges: Vec<String>,
    pub frets_tang_width: f64,
    pub frets_crown_height: f64,
    pub frets_crown_width: f64,
    pub ignore_custom_width: bool,
    pub draw_profile: bool,
    pub toolpath: ToolpathParams,
    pub debug: bool,
    source: FretboardOptions,
}

impl ParameterSet {
    /// Normalizes every length to millimeters and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a length is not positive, fewer than two
    /// strings or more than [`MAX_FRETS`] frets are requested, the derived bridge width is not positive, or
    /// (with toolpaths requested) the stepover is outside `(0, 100]`.
    pub fn from_options(options: &FretboardOptions) -> Result<Self> {
        let scale = positive("scale", options.scale)?;
        if options.strings < 2 {
            return Err(ConfigError::TooFewStrings {
                count: options.strings,
            }
            .into());
        }
        if options.frets > MAX_FRETS {
            return Err(ConfigError::TooManyFrets {
                count: options.frets,
                max: MAX_FRETS,
            }
            .into());
        }

        let nut_width = positive("nut_width", options.nut_width)?;
        let nut_string_space = positive("nut_string_space", options.nut_string_space)?;
        let bridge_string_space = positive("bridge_string_space", options.bridge_string_space)?;

        let bridge_width = if options.ignore_bridge_width {
            let derived = derive_bridge_width(
                bridge_string_space,
                options.strings,
                nut_width,
                nut_string_space,
            );
            debug!(bridge_width = derived, "derived bridge width");
            if derived <= 0.0 {
                return Err(ConfigError::NonPositive {
                    parameter: "bridge_width",
                    value: derived,
                }
                .into());
            }
            derived
        } else {
            positive("bridge_width", options.bridge_width)?
        };

        let toolpath = ToolpathParams {
            draw: options.ftp_tool_draw,
            tool_diameter: options.ftp_tool_diameter.to_mm(),
            stepover_percent: options.ftp_tool_stepover,
            slot_width: options.ftp_slot_width.to_mm(),
            slot_margin: options.ftp_slot_margin.to_mm(),
        };
        if toolpath.draw {
            positive("ftp_tool_diameter", options.ftp_tool_diameter)?;
            positive("ftp_slot_width", options.ftp_slot_width)?;
            non_negative("ftp_slot_margin", options.ftp_slot_margin)?;
            if !(1..=100).contains(&toolpath.stepover_percent) {
                return Err(ConfigError::StepoverOutOfRange {
                    value: toolpath.stepover_percent,
                }
                .into());
            }
        }

        Ok(Self {
            scale,
            fretboard_thickness: positive("fretboard_thickness", options.fretboard_thickness)?,
            strings: options.strings,
            strings_color: options.strings_color,
            nut_radius: positive("nut_radius", options.nut_radius)?,
            nut_width,
            nut_string_space,
            bridge_radius: positive("bridge_radius", options.bridge_radius)?,
            bridge_width,
            bridge_width_derived: options.ignore_bridge_width,
            bridge_string_space,
            frets: options.frets,
            frets_color: options.frets_color,
            string_gauges: gauges::split_gauge_list(&options.strings_gauges),
            frets_tang_width: positive("frets_tang_width", options.frets_tang_width)?,
            frets_crown_height: positive("frets_crown_height", options.frets_crown_height)?,
            frets_crown_width: positive("frets_crown_width", options.frets_crown_width)?,
            ignore_custom_width: options.ignore_custom_width,
            draw_profile: options.draw_profile,
            toolpath,
            debug: options.debug,
            source: options.clone(),
        })
    }

    /// The options this set was built from, units as supplied.
    #[must_use]
    pub fn source(&self) -> &FretboardOptions {
        &self.source
    }
}

/// Bridge width that keeps the nut's outer-string margin at the bridge.
#[must_use]
pub fn derive_bridge_width(
    bridge_string_space: f64,
    strings: u32,
    nut_width: f64,
    nut_string_space: f64,
) -> f64 {
    bridge_string_space * f64::from(strings.saturating_sub(1)) + nut_width - nut_string_space
}

fn positive(parameter: &'static str, measure: Measure) -> std::result::Result<f64, ConfigError> {
    let value = measure.to_mm();
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}

fn non_negative(
    parameter: &'static str,
    measure: Measure,
) -> std::result::Result<f64, ConfigError> {
    let value = measure.to_mm();
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { parameter, value })
    }
}

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::units::Measure;

/// Raw generation options, one field per recognized input option.
///
/// Lengths keep the unit they were supplied in; [`super::ParameterSet`]
/// normalizes them. Missing fields in a deserialized document take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardOptions {
    pub scale: Measure,
    pub fretboard_thickness: Measure,
    pub strings: u32,
    pub strings_color: Rgba,
    pub nut_radius: Measure,
    pub nut_width: Measure,
    /// Distance between the two outer strings at the nut.
    pub nut_string_space: Measure,
    pub bridge_radius: Measure,
    pub bridge_width: Measure,
    /// Derive the bridge width from string spacing instead of `bridge_width`.
    pub ignore_bridge_width: bool,
    /// Distance between two adjacent strings at the bridge.
    pub bridge_string_space: Measure,
    pub frets: u32,
    pub frets_color: Rgba,
    /// Comma separated gauges in thousandths of an inch, thickest last.
    pub strings_gauges: String,
    pub frets_tang_width: Measure,
    pub frets_crown_height: Measure,
    pub frets_crown_width: Measure,
    /// Draw every string at the default gauge and skip fret crowns.
    pub ignore_custom_width: bool,
    pub draw_profile: bool,
    pub ftp_tool_draw: bool,
    pub ftp_tool_diameter: Measure,
    /// Tool stepover in percent of the tool diameter.
    pub ftp_tool_stepover: u32,
    pub ftp_slot_width: Measure,
    pub ftp_slot_margin: Measure,
    pub debug: bool,
}

impl Default for FretboardOptions {
    fn default() -> Self {
        Self {
            scale: Measure::mm(650.0),
            fretboard_thickness: Measure::mm(6.0),
            strings: 6,
            strings_color: Rgba(0x00ff_00ff),
            nut_radius: Measure::mm(400.0),
            nut_width: Measure::mm(43.0),
            nut_string_space: Measure::mm(35.0),
            bridge_radius: Measure::mm(400.0),
            bridge_width: Measure::mm(56.0),
            ignore_bridge_width: false,
            bridge_string_space: Measure::mm(10.5),
            frets: 22,
            frets_color: Rgba(0xe0e0_e0ff),
            strings_gauges: "10,13,17,26,36,46".to_owned(),
            frets_tang_width: Measure::mm(0.55),
            frets_crown_height: Measure::mm(1.2),
            frets_crown_width: Measure::mm(2.4),
            ignore_custom_width: false,
            draw_profile: false,
            ftp_tool_draw: false,
            ftp_tool_diameter: Measure::mm(0.5),
            ftp_tool_stepover: 50,
            ftp_slot_width: Measure::mm(0.6),
            ftp_slot_margin: Measure::mm(1.0),
            debug: false,
        }
    }
}

use std::fmt;

use super::color::Rgba;
use super::options::FretboardOptions;
use super::units::Measure;

/// Typed value of a single option, as shown in the parameter summary.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Length(Measure),
    Count(u32),
    Percent(u32),
    Flag(bool),
    Color(Rgba),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(m) => write!(f, "{m}"),
            Self::Count(n) => write!(f, "{n}"),
            Self::Percent(p) => write!(f, "{p} %"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Color(c) => write!(f, "{c}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of the option schema.
#[derive(Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    read: fn(&FretboardOptions) -> OptionValue,
}

impl OptionSpec {
    /// Reads this option's value from `options`.
    #[must_use]
    pub fn value(&self, options: &FretboardOptions) -> OptionValue {
        (self.read)(options)
    }

    /// Returns whether the option is a length subject to unit conversion.
    #[must_use]
    pub fn is_length(&self, options: &FretboardOptions) -> bool {
        matches!(self.value(options), OptionValue::Length(_))
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec").field("name", &self.name).finish()
    }
}

macro_rules! entry {
    ($name:ident, $kind:ident) => {
        OptionSpec {
            name: stringify!($name),
            read: |o| OptionValue::$kind(o.$name.clone()),
        }
    };
}

/// Every recognized option, in presentation order.
#[allow(clippy::clone_on_copy)]
pub const OPTIONS: &[OptionSpec] = &[
    entry!(scale, Length),
    entry!(fretboard_thickness, Length),
    entry!(strings, Count),
    entry!(strings_color, Color),
    entry!(nut_radius, Length),
    entry!(nut_width, Length),
    entry!(nut_string_space, Length),
    entry!(bridge_radius, Length),
    entry!(bridge_width, Length),
    entry!(ignore_bridge_width, Flag),
    entry!(bridge_string_space, Length),
    entry!(frets, Count),
    entry!(frets_color, Color),
    entry!(strings_gauges, Text),
    entry!(frets_tang_width, Length),
    entry!(frets_crown_height, Length),
    entry!(frets_crown_width, Length),
    entry!(ignore_custom_width, Flag),
    entry!(draw_profile, Flag),
    entry!(ftp_tool_draw, Flag),
    entry!(ftp_tool_diameter, Length),
    entry!(ftp_tool_stepover, Percent),
    entry!(ftp_slot_width, Length),
    entry!(ftp_slot_margin, Length),
    entry!(debug, Flag),
];

/// Formats one `name: value` line per schema entry.
#[must_use]
pub fn summary_lines(options: &FretboardOptions) -> Vec<String> {
    OPTIONS
        .iter()
        .map(|spec| format!("{}: {}", spec.name, spec.value(options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_option() {
        let lines = summary_lines(&FretboardOptions::default());
        assert_eq!(lines.len(), OPTIONS.len());
        assert_eq!(lines[0], "scale: 650 mm");
        assert_eq!(lines[2], "strings: 6");
        assert_eq!(lines[3], "strings_color: #00ff00");
        assert!(lines.contains(&"strings_gauges: 10,13,17,26,36,46".to_owned()));
        assert!(lines.contains(&"ftp_tool_stepover: 50 %".to_owned()));
        assert!(lines.contains(&"draw_profile: false".to_owned()));
    }

    #[test]
    fn lengths_keep_their_input_unit() {
        let options = FretboardOptions {
            scale: Measure::inches(25.5),
            ..FretboardOptions::default()
        };
        assert_eq!(summary_lines(&options)[0], "scale: 25.5 in");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = OPTIONS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OPTIONS.len());
    }

    #[test]
    fn lengths_are_flagged_for_conversion() {
        let options = FretboardOptions::default();
        let lengths = OPTIONS.iter().filter(|s| s.is_length(&options)).count();
        assert_eq!(lengths, 14);
    }
}

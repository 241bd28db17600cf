use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::MM_PER_INCH;

/// Length unit accepted on input. Everything is normalized to millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "in")]
    Inch,
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
}

impl Unit {
    /// Converts `value` expressed in this unit to millimeters.
    #[must_use]
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Inch => value * MM_PER_INCH,
            Self::Millimeter => value,
        }
    }

    /// Returns the short unit symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Millimeter => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in" => Ok(Self::Inch),
            "mm" => Ok(Self::Millimeter),
            other => Err(ConfigError::UnknownUnit(other.to_owned())),
        }
    }
}

/// A length value tagged with the unit it was given in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl Measure {
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn mm(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    #[must_use]
    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    /// Returns the value in millimeters.
    #[must_use]
    pub fn to_mm(self) -> f64 {
        self.unit.to_mm(self.value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

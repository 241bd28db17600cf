use std::fmt;

use thiserror::Error;

/// Gauge applied to every string when no usable gauge list is given.
pub const DEFAULT_GAUGE: f64 = 10.0;

/// Why a gauge list could not be used as given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeRejection {
    #[error("gauge list has {found} entries but there are {expected} strings")]
    CountMismatch { expected: usize, found: usize },

    #[error("gauge entry {index} ({entry:?}) is not a positive number")]
    InvalidEntry { index: usize, entry: String },
}

/// Per-string gauges, indexed by string slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauges(Vec<f64>);

impl Gauges {
    /// Every string at `gauge`.
    #[must_use]
    pub fn uniform(gauge: f64, count: usize) -> Self {
        Self(vec![gauge; count])
    }

    /// Parses a gauge list given thinnest string first.
    ///
    /// The list is reversed so that slot 0 holds the thickest string. An
    /// empty list means "no gauges supplied" and yields the default gauge.
    ///
    /// # Errors
    ///
    /// Returns a [`GaugeRejection`] if the entry count differs from `count`
    /// or an entry is not a finite positive number.
    pub fn parse(entries: &[String], count: usize) -> Result<Self, GaugeRejection> {
        if entries.is_empty() {
            return Ok(Self::uniform(DEFAULT_GAUGE, count));
        }
        if entries.len() != count {
            return Err(GaugeRejection::CountMismatch {
                expected: count,
                found: entries.len(),
            });
        }
        let mut gauges = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry.trim().parse::<f64>() {
                Ok(g) if g.is_finite() && g > 0.0 => Ok(g),
                _ => Err(GaugeRejection::InvalidEntry {
                    index,
                    entry: entry.clone(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        gauges.reverse();
        Ok(Self(gauges))
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.0.get(slot).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl fmt::Display for Gauges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Splits a comma separated gauge list into trimmed entries.
///
/// A blank list yields no entries.
#[must_use]
pub fn split_gauge_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_owned()).collect()
}

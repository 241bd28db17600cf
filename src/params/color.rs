use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGBA color packed as `0xRRGGBBAA`, the format color pickers hand over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const BLACK: Self = Self(0x0000_00ff);
    pub const RED: Self = Self(0xff00_00ff);
    pub const GREY: Self = Self(0x9999_99ff);
    pub const ORANGE: Self = Self(0xff66_00ff);

    /// Returns the `#rrggbb` hex form, dropping alpha.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:06x}", self.0 >> 8)
    }

    /// Returns alpha as an opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(self) -> f64 {
        f64::from(self.0 & 0xff) / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

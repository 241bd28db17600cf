use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::math::fret_scale::position_from_bridge;

/// Grid the layout midline snaps down to.
const MIDLINE_GRID: f64 = 10.0;

/// Vertical coordinate the whole layout is centered on.
///
/// Snapped down to a multiple of 10 so the board sits on round numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Midline(f64);

impl Midline {
    #[must_use]
    pub fn from_bridge_width(bridge_width: f64) -> Self {
        Self(MIDLINE_GRID * (bridge_width / MIDLINE_GRID).floor())
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.0
    }
}

/// Linear width change of the board between bridge and nut.
///
/// Longitudinal coordinate `x` is 0 at the bridge axis and `scale` at the nut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperModel {
    scale: f64,
    bridge_width: f64,
    nut_width: f64,
    angle_tangent: f64,
}

impl TaperModel {
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if `scale` is not positive.
    pub fn new(scale: f64, bridge_width: f64, nut_width: f64) -> Result<Self> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(ConfigError::NonPositive {
                parameter: "scale",
                value: scale,
            }
            .into());
        }
        let angle_tangent = (bridge_width / 2.0 - nut_width / 2.0) / scale;
        let model = Self {
            scale,
            bridge_width,
            nut_width,
            angle_tangent,
        };
        debug!(
            angle_rad = model.angle(),
            angle_deg = model.angle().to_degrees(),
            "fretboard taper"
        );
        Ok(model)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn bridge_width(&self) -> f64 {
        self.bridge_width
    }

    #[must_use]
    pub fn nut_width(&self) -> f64 {
        self.nut_width
    }

    /// Tangent of the angle each board edge makes with the scale axis.
    #[must_use]
    pub fn angle_tangent(&self) -> f64 {
        self.angle_tangent
    }

    /// Edge angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle_tangent.atan()
    }

    /// Board half-width at `x`, measured from the bridge axis.
    #[must_use]
    pub fn half_width_from_bridge(&self, x: f64) -> f64 {
        self.bridge_width / 2.0 - x * self.angle_tangent
    }

    /// Board half-width at distance `d` from the nut.
    ///
    /// Mirror of [`Self::half_width_from_bridge`]: `from_nut(scale - x) == from_bridge(x)`.
    #[must_use]
    pub fn half_width_from_nut(&self, d: f64) -> f64 {
        self.nut_width / 2.0 + d * self.angle_tangent
    }

    /// Both board edges `(low, high)` at `x`, around `midline`.
    #[must_use]
    pub fn edges_at(&self, x: f64, midline: Midline) -> (f64, f64) {
        let half = self.half_width_from_bridge(x);
        (midline.y() - half, midline.y() + half)
    }

    /// Longitudinal coordinate of fret `n`.
    #[must_use]
    pub fn fret_x(&self, n: u32) -> f64 {
        position_from_bridge(self.scale, n)
    }
}

use tracing::debug;

use crate::error::Result;
use crate::params::ParameterSet;

use super::taper::{Midline, TaperModel};

/// Values derived once per request and shared read-only by every layout
/// operation.
#[derive(Debug, Clone)]
pub struct LayoutContext<'a> {
    pub params: &'a ParameterSet,
    pub midline: Midline,
    pub taper: TaperModel,
}

impl<'a> LayoutContext<'a> {
    /// Derives the midline and taper model from `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale length is not positive.
    pub fn new(params: &'a ParameterSet) -> Result<Self> {
        let midline = Midline::from_bridge_width(params.bridge_width);
        debug!(midline = midline.y(), "layout midline");
        let taper = TaperModel::new(params.scale, params.bridge_width, params.nut_width)?;
        Ok(Self {
            params,
            midline,
            taper,
        })
    }

    /// Index of the closing boundary fret, one past the last real fret.
    #[must_use]
    pub fn closing_fret(&self) -> u32 {
        self.params.frets + 1
    }

    /// Longitudinal coordinate of the closing boundary fret.
    #[must_use]
    pub fn realized_end_x(&self) -> f64 {
        self.taper.fret_x(self.closing_fret())
    }
}

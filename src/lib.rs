pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{ConfigError, FretboardError, GeometryError, Result};
pub use operations::{Fretboard, GenerateFretboard};
pub use params::{FretboardOptions, ParameterSet};

/// Normalizes `options` and generates the full fretboard drawing.
///
/// # Errors
///
/// Returns an error if the options are inconsistent or describe geometry
/// that cannot be realized.
pub fn generate(options: &FretboardOptions) -> Result<Fretboard> {
    let params = ParameterSet::from_options(options)?;
    GenerateFretboard::new(&params).execute()
}

use thiserror::Error;

/// Top-level error type for fretboard generation.
#[derive(Debug, Error)]
pub enum FretboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Inconsistent or out-of-range input parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: f64 },

    #[error("at least 2 strings are required, got {count}")]
    TooFewStrings { count: u32 },

    #[error("{count} frets requested, at most {max} are supported")]
    TooManyFrets { count: u32, max: u32 },

    #[error("tool stepover {value}% is out of range (0, 100]")]
    StepoverOutOfRange { value: u32 },

    #[error("unknown unit {0:?}, expected \"in\" or \"mm\"")]
    UnknownUnit(String),
}

/// Derived geometry that cannot be realized.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{side} radius {radius} is smaller than the half-width {half_width} it must span")]
    RadiusTooSmall {
        side: &'static str,
        radius: f64,
        half_width: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`FretboardError`].
pub type Result<T> = std::result::Result<T, FretboardError>;

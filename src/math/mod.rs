pub mod arc_2d;
pub mod fret_scale;
pub mod polygon_2d;

/// 2D point type. `x` runs along the scale (0 at the bridge), `y` across it.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

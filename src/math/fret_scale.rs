//! Equal-tempered fret placement.
//!
//! `d = s - s / 2^(n / 12)` where `d` is the distance from the nut,
//! `s` the scale length and `n` the fret number.

/// Number of equal-tempered semitones per octave.
const SEMITONES_PER_OCTAVE: f64 = 12.0;

/// Returns the distance from the nut to fret `n` on a scale of length `scale`.
///
/// `n` may exceed the physical fret count; fret `0` is the nut itself.
#[must_use]
pub fn distance_from_nut(scale: f64, n: u32) -> f64 {
    scale - scale / 2f64.powf(f64::from(n) / SEMITONES_PER_OCTAVE)
}

/// Returns the longitudinal drawing coordinate of fret `n`, measured from
/// the bridge axis (`x = 0`) toward the nut (`x = scale`).
#[must_use]
pub fn position_from_bridge(scale: f64, n: u32) -> f64 {
    scale - distance_from_nut(scale, n)
}

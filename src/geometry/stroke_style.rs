use serde::{Serialize, Serializer};

use crate::error::{GeometryError, Result};
use crate::params::Rgba;

/// Suggested stroke for a primitive. Fills are always none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeStyle {
    width: f64,
    #[serde(serialize_with = "hex_color")]
    color: Rgba,
    opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash: Option<Vec<f64>>,
}

impl StrokeStyle {
    /// Creates an opaque, solid stroke.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64, color: Rgba) -> Result<Self> {
        if width <= 0.0 || !width.is_finite() {
            return Err(
                GeometryError::Degenerate(format!("stroke width {width} must be positive")).into(),
            );
        }
        Ok(Self {
            width,
            color,
            opacity: 1.0,
            dash: None,
        })
    }

    /// Sets the stroke opacity, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets a dash pattern of alternating dash and gap lengths.
    #[must_use]
    pub fn with_dash(mut self, pattern: Vec<f64>) -> Self {
        self.dash = Some(pattern);
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn dash(&self) -> Option<&[f64]> {
        self.dash.as_deref()
    }
}

fn hex_color<S: Serializer>(color: &Rgba, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.hex())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(2.0, Rgba::BLACK).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert!((style.half_width() - 1.0).abs() < f64::EPSILON);
        assert!((style.opacity() - 1.0).abs() < f64::EPSILON);
        assert!(style.dash().is_none());
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0, Rgba::BLACK).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(StrokeStyle::new(-1.0, Rgba::BLACK).is_err());
    }

    #[test]
    fn opacity_is_clamped() {
        let style = StrokeStyle::new(0.1, Rgba::RED).unwrap().with_opacity(1.5);
        assert!((style.opacity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_color_as_hex() {
        let style = StrokeStyle::new(0.1, Rgba::BLACK)
            .unwrap()
            .with_dash(vec![2.0, 1.0]);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["color"], "#000000");
        assert_eq!(json["dash"], serde_json::json!([2.0, 1.0]));
    }
}

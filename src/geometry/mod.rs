//! Typed drawing primitives produced by the layout operations.

pub mod arc;
pub mod shapes;
pub mod stroke_style;

pub use arc::EllipticalArc;
pub use shapes::{Polygon, Polyline, Segment, TextLabel};
pub use stroke_style::StrokeStyle;

use serde::Serialize;

use crate::math::Point2;

/// What a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ScaleOutline,
    RealizedOutline,
    FretTang,
    FretCrown,
    String,
    Toolpath,
    SideProfile,
    ParamsSummary,
}

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Shape {
    Segment(Segment),
    Polygon(Polygon),
    Polyline(Polyline),
    Arc(EllipticalArc),
    Text(TextLabel),
}

impl Shape {
    /// Flattens the shape into an ordered point list.
    ///
    /// Polygons are not repeated at their first point; text yields its anchor.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        match self {
            Self::Segment(s) => vec![s.start, s.end],
            Self::Polygon(p) => p.points.clone(),
            Self::Polyline(p) => p.points.clone(),
            Self::Arc(a) => a.to_points(tolerance),
            Self::Text(t) => vec![t.anchor],
        }
    }
}

/// A labeled, styled piece of geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub id: String,
    pub role: Role,
    pub shape: Shape,
    pub style: StrokeStyle,
}

impl Primitive {
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role, shape: Shape, style: StrokeStyle) -> Self {
        Self {
            id: id.into(),
            role,
            shape,
            style,
        }
    }

    /// Returns the segment if this primitive is one.
    #[must_use]
    pub fn as_segment(&self) -> Option<&Segment> {
        match &self.shape {
            Shape::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the polygon if this primitive is one.
    #[must_use]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match &self.shape {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the polyline if this primitive is one.
    #[must_use]
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match &self.shape {
            Shape::Polyline(p) => Some(p),
            _ => None,
        }
    }
}

/// An ordered, labeled collection of primitives rendered as one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveGroup {
    pub label: &'static str,
    pub primitives: Vec<Primitive>,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterates over primitives carrying `role`.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role == role)
    }
}

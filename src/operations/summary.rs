use crate::error::Result;
use crate::geometry::{Primitive, PrimitiveGroup, Role, Shape, StrokeStyle, TextLabel};
use crate::math::Point2;
use crate::params::schema::OPTIONS;
use crate::params::{FretboardOptions, Rgba};

const TITLE_FONT_SIZE: f64 = 4.0;
const LINE_FONT_SIZE: f64 = 3.0;
const LINE_SPACING: f64 = 3.0;

/// Text block listing every input option as supplied.
///
/// Text is filled with the style color; the stroke width is unused.
pub struct ParamsSummary<'a> {
    options: &'a FretboardOptions,
}

impl<'a> ParamsSummary<'a> {
    #[must_use]
    pub fn new(options: &'a FretboardOptions) -> Self {
        Self { options }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a stroke style cannot be built.
    pub fn execute(&self) -> Result<PrimitiveGroup> {
        let style = StrokeStyle::new(0.1, Rgba::BLACK)?;
        let mut group = PrimitiveGroup::new("params_reminder");
        group.push(Primitive::new(
            "title",
            Role::ParamsSummary,
            Shape::Text(TextLabel {
                anchor: Point2::origin(),
                font_size: TITLE_FONT_SIZE,
                content: "Params:".to_owned(),
            }),
            style.clone(),
        ));
        for (i, option) in (1u32..).zip(OPTIONS) {
            let line = format!("{}: {}", option.name, option.value(self.options));
            group.push(Primitive::new(
                format!("param_{}", option.name),
                Role::ParamsSummary,
                Shape::Text(TextLabel {
                    anchor: Point2::new(0.0, LINE_SPACING * f64::from(i)),
                    font_size: LINE_FONT_SIZE,
                    content: line,
                }),
                style.clone(),
            ));
        }
        Ok(group)
    }
}

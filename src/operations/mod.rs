//! Layout operations, leaf to root: taper model, outlines, strings, frets,
//! slot toolpaths, side profile, parameter summary, and the generator that
//! runs them in order.

pub mod context;
pub mod frets;
pub mod generate;
pub mod outline;
pub mod profile;
pub mod strings;
pub mod summary;
pub mod taper;
pub mod toolpath;

pub use context::LayoutContext;
pub use frets::{FretKind, FretLayout, FretLayoutOutput, FretSlot};
pub use generate::{Fretboard, GenerateFretboard};
pub use outline::BoardOutline;
pub use profile::{radius_drop, SideProfile};
pub use strings::{gauge_to_mm, StringLayout, StringLayoutOutput, StringPath};
pub use summary::ParamsSummary;
pub use taper::{Midline, TaperModel};
pub use toolpath::{pass_count, SlotToolpath, ToolpathPlan};

//! Glide Segments
//!
//! The data side of a segmented control: an ordered registry of segments
//! with a single selected entry, the geometry that splits the control width
//! into equal segments, and the palette used to style segment labels.

mod error;
mod geometry;
mod item;
mod registry;
mod theme;

pub use error::SegmentError;
pub use geometry::{LayoutGeometry, DEFAULT_SEGMENT_INSET};
pub use item::{PanelId, SegmentId, SegmentItem};
pub use registry::SegmentRegistry;
pub use theme::{Color, FontWeight, LabelStyle, Palette, ThemeMode};

pub type Result<T> = std::result::Result<T, SegmentError>;

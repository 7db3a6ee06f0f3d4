pub mod error;
pub mod camera;
pub mod scene;
pub mod volume;
pub mod numeric;
pub mod interval;
pub mod rotation;
pub mod json_parser;
pub mod slice_range;

pub mod prelude;

pub use error::SliceRangeError;
pub use slice_range::{SliceRange, compute_slice_range, compute_slice_range_with};
pub use volume::{ImageData, ImageVolume};

pub mod decode;
pub mod encode;
pub mod geometry;
pub mod ops;
pub mod orientation;
pub mod params;
pub mod resize;

pub use decode::decode_image;
pub use encode::encode_image;
pub use geometry::{compute_geometry, validate_target_ratio, Geometry};
pub use ops::{CanvasSpec, Channels, ImageOps, Layer, PixelOps, Region};
pub use orientation::{auto_orient, Orientation, OrientedImage};
pub use params::{ExpandOptions, OutputFormat, PaddingColor, PaddingStrategy};
pub use resize::{resize_image, ResizeMode};

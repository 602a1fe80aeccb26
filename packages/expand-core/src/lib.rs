pub mod constants;
pub mod errors;
pub mod expand;
pub mod padding;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    DEFAULT_BLUR_AMOUNT, DEFAULT_QUALITY, DEFAULT_SOURCE_RATIO, DEFAULT_TARGET_RATIO, MAX_PIXELS,
};
pub use errors::{CodecError, ExpandError, ExpandResult};
pub use expand::{expand, expand_with};
pub use padding::{apply_padding, edge_sample_width};
pub use transform::{
    auto_orient, compute_geometry, decode_image, encode_image, validate_target_ratio, CanvasSpec,
    Channels, ExpandOptions, Geometry, ImageOps, Layer, Orientation, OrientedImage, OutputFormat,
    PaddingColor, PaddingStrategy, PixelOps, Region, ResizeMode,
};
pub use validation::{
    default_output_path, output_format_for, parse_color, parse_strategy, validate_options,
    validate_quality,
};

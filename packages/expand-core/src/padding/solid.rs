use image::DynamicImage;

use crate::errors::CodecError;
use crate::transform::geometry::Geometry;
use crate::transform::ops::{CanvasSpec, Channels, Layer, PixelOps};
use crate::transform::params::PaddingColor;

/// 不透明な単色キャンバスに元画像を配置する
pub fn apply<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    geometry: &Geometry,
    color: PaddingColor,
) -> Result<DynamicImage, CodecError> {
    let canvas = ops.create_canvas(CanvasSpec {
        width: geometry.new_width,
        height: geometry.new_height,
        channels: Channels::of(source),
        background: color.rgba(),
    })?;

    ops.composite(canvas, &[Layer::at(source, geometry.left_padding)])
}

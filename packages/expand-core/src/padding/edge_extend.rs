use image::DynamicImage;

use crate::errors::CodecError;
use crate::padding::strip::{build_edge_strip, compose_with_strips, Edge, StripRecipe};
use crate::transform::geometry::Geometry;
use crate::transform::ops::PixelOps;

/// 最外列を最近傍でパディング幅まで引き伸ばす
///
/// 行ごとに端のピクセルがそのまま複製されるため、新しい色は生まれない
pub fn apply<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    geometry: &Geometry,
) -> Result<DynamicImage, CodecError> {
    let recipe = StripRecipe::edge_column();
    let left = build_edge_strip(ops, source, Edge::Left, geometry.left_padding, recipe)?;
    let right = build_edge_strip(ops, source, Edge::Right, geometry.right_padding, recipe)?;

    compose_with_strips(ops, source, geometry, left, right)
}

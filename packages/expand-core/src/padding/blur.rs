use image::DynamicImage;

use crate::constants::{EDGE_SAMPLE_DIVISOR, MAX_EDGE_SAMPLE_WIDTH};
use crate::errors::CodecError;
use crate::padding::strip::{build_edge_strip, compose_with_strips, Edge, StripRecipe};
use crate::transform::geometry::Geometry;
use crate::transform::ops::PixelOps;
use crate::transform::resize::ResizeMode;

/// ぼかし用に端から切り出す幅
///
/// 元画像幅の 10%（切り捨て）、最大 20px。幅 10px 未満の画像では 0 になる
pub fn edge_sample_width(original_width: u32) -> u32 {
    (original_width / EDGE_SAMPLE_DIVISOR).min(MAX_EDGE_SAMPLE_WIDTH)
}

/// 端の領域をぼかしてからパディング幅に滑らかに引き伸ばす
///
/// 切り出し幅が 0 になる細い画像では、その側は最外列の引き伸ばしで埋める
pub fn apply<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    geometry: &Geometry,
    blur_amount: f32,
) -> Result<DynamicImage, CodecError> {
    let sample_width = edge_sample_width(source.width());

    let recipe = if sample_width == 0 {
        tracing::debug!(
            width = source.width(),
            "source too narrow for blur sampling, extending edge columns"
        );
        StripRecipe::edge_column()
    } else {
        StripRecipe {
            sample_width,
            blur: Some(blur_amount),
            mode: ResizeMode::Smooth,
        }
    };

    let left = build_edge_strip(ops, source, Edge::Left, geometry.left_padding, recipe)?;
    let right = build_edge_strip(ops, source, Edge::Right, geometry.right_padding, recipe)?;

    compose_with_strips(ops, source, geometry, left, right)
}

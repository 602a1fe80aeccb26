//! 端の帯（ストリップ）の生成と、帯・元画像の横並び合成
//!
//! EdgeExtend と Blur はどちらも「端を切り出す → 加工 → 引き伸ばす → 合成」
//! の流れで、違いは切り出し幅・ぼかしの有無・リサイズ方式だけ。

use image::DynamicImage;

use crate::errors::CodecError;
use crate::transform::geometry::Geometry;
use crate::transform::ops::{CanvasSpec, Channels, Layer, PixelOps, Region};
use crate::transform::resize::ResizeMode;

/// 帯を取る側
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Left,
    Right,
}

/// 帯の作り方
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StripRecipe {
    /// 端から切り出す幅（1 以上）
    pub sample_width: u32,
    /// 引き伸ばす前にかけるぼかし
    pub blur: Option<f32>,
    pub mode: ResizeMode,
}

impl StripRecipe {
    /// 最外列 1px を最近傍で引き伸ばす
    pub(crate) fn edge_column() -> Self {
        Self {
            sample_width: 1,
            blur: None,
            mode: ResizeMode::Nearest,
        }
    }
}

/// 端の帯を作り、`padding × 元画像の高さ` に引き伸ばす
///
/// padding が 0 の側は何もせず `None` を返す（幅 0 の切り出しは行わない）
pub(crate) fn build_edge_strip<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    edge: Edge,
    padding: u32,
    recipe: StripRecipe,
) -> Result<Option<DynamicImage>, CodecError> {
    if padding == 0 {
        return Ok(None);
    }

    let (width, height) = (source.width(), source.height());
    let sample_width = recipe.sample_width.min(width);
    let left = match edge {
        Edge::Left => 0,
        Edge::Right => width - sample_width,
    };

    let sample = ops.extract(source, Region::column_strip(left, sample_width, height))?;
    let sample = match recipe.blur {
        Some(amount) => ops.blur(&sample, amount)?,
        None => sample,
    };

    ops.resize(&sample, padding, height, recipe.mode).map(Some)
}

/// 左の帯・元画像・右の帯を左から隙間なく並べる
///
/// 下地は帯と元画像で完全に覆われるため透明（RGB の場合は黒）で作成する
pub(crate) fn compose_with_strips<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    geometry: &Geometry,
    left: Option<DynamicImage>,
    right: Option<DynamicImage>,
) -> Result<DynamicImage, CodecError> {
    let canvas = ops.create_canvas(CanvasSpec {
        width: geometry.new_width,
        height: geometry.new_height,
        channels: Channels::of(source),
        background: [0, 0, 0, 0],
    })?;

    let mut layers = Vec::with_capacity(3);
    if let Some(strip) = &left {
        layers.push(Layer::at(strip, 0));
    }
    layers.push(Layer::at(source, geometry.left_padding));
    if let Some(strip) = &right {
        layers.push(Layer::at(strip, geometry.right_offset()));
    }

    ops.composite(canvas, &layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::fixtures::horizontal_gradient;
    use crate::transform::ops::ImageOps;

    #[test]
    fn test_zero_padding_skips_strip() {
        let source = horizontal_gradient(10, 4);
        let strip =
            build_edge_strip(&ImageOps, &source, Edge::Left, 0, StripRecipe::edge_column()).unwrap();
        assert!(strip.is_none());
    }

    #[test]
    fn test_strip_has_padding_width_and_source_height() {
        let source = horizontal_gradient(10, 4);
        let recipe = StripRecipe {
            sample_width: 3,
            blur: Some(1.0),
            mode: ResizeMode::Smooth,
        };
        let strip = build_edge_strip(&ImageOps, &source, Edge::Right, 17, recipe)
            .unwrap()
            .unwrap();
        assert_eq!((strip.width(), strip.height()), (17, 4));
    }

    #[test]
    fn test_sample_width_is_capped_at_source_width() {
        let source = horizontal_gradient(2, 4);
        let recipe = StripRecipe {
            sample_width: 20,
            blur: None,
            mode: ResizeMode::Nearest,
        };
        let strip = build_edge_strip(&ImageOps, &source, Edge::Right, 5, recipe).unwrap();
        assert!(strip.is_some());
    }

    #[test]
    fn test_compose_places_source_between_strips() {
        let source = horizontal_gradient(10, 4);
        let geometry = Geometry {
            new_width: 15,
            new_height: 4,
            left_padding: 2,
            right_padding: 3,
        };
        let out = compose_with_strips(&ImageOps, &source, &geometry, None, None)
            .unwrap()
            .to_rgb8();
        assert_eq!(out.dimensions(), (15, 4));
        assert_eq!(out.get_pixel(2, 1), source.to_rgb8().get_pixel(0, 1));
        assert_eq!(out.get_pixel(11, 3), source.to_rgb8().get_pixel(9, 3));
    }
}

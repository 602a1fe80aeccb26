//! パディング方式ごとの処理
//!
//! どの方式も `Geometry` の寸法のバッファを返し、元画像は拡大縮小せず
//! x = `left_padding` に全高で配置される。チャンネル数は元画像と同じ。

pub mod blur;
pub mod edge_extend;
pub mod solid;
mod strip;

use image::DynamicImage;

use crate::errors::CodecError;
use crate::transform::geometry::Geometry;
use crate::transform::ops::PixelOps;
use crate::transform::params::{ExpandOptions, PaddingStrategy};

pub use blur::edge_sample_width;

/// 選択されたパディング方式で拡張後の画像を作成する
pub fn apply_padding<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    geometry: &Geometry,
    options: &ExpandOptions,
) -> Result<DynamicImage, CodecError> {
    if source.width() != geometry.source_width() || source.height() != geometry.new_height {
        return Err(CodecError::ProcessingFailed(format!(
            "source {}x{} does not match geometry {}x{} with {}+{} padding",
            source.width(),
            source.height(),
            geometry.new_width,
            geometry.new_height,
            geometry.left_padding,
            geometry.right_padding
        )));
    }

    match options.strategy {
        PaddingStrategy::Solid => solid::apply(ops, source, geometry, options.color),
        PaddingStrategy::EdgeExtend => edge_extend::apply(ops, source, geometry),
        PaddingStrategy::Blur => blur::apply(ops, source, geometry, options.blur_amount),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use image::{DynamicImage, Rgb, RgbImage};

    use crate::transform::geometry::Geometry;

    /// 100x100 を 1.91:1 にした寸法（191x100、左 45 / 右 46）
    pub(crate) fn square_geometry() -> Geometry {
        Geometry {
            new_width: 191,
            new_height: 100,
            left_padding: 45,
            right_padding: 46,
        }
    }

    /// 横方向のグラデーション
    pub(crate) fn horizontal_gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width.max(2)) as u8, (y % 256) as u8, 128])
        }))
    }

    /// 行ごとに色が変わる横縞（端の列も行ごとに異なる色になる）
    pub(crate) fn banded_gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let band = (y / 10) as u8;
            Rgb([band.wrapping_mul(40), (x % 256) as u8, 255 - band.wrapping_mul(20)])
        }))
    }

    /// 左右 10 列だけ急な傾きを持つ画像（中央は一定）
    pub(crate) fn edge_ramp(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let red = if x < 10 {
                x * 25
            } else if x + 10 >= width {
                (width - 1 - x) * 25
            } else {
                128
            };
            Rgb([red as u8, (y * 2 % 256) as u8, 64])
        }))
    }
}

use std::borrow::Cow;

use image::DynamicImage;

use crate::constants::SOURCE_RATIO_TOLERANCE;
use crate::errors::{ExpandError, ExpandResult};
use crate::padding::apply_padding;
use crate::transform::geometry::{compute_geometry, validate_target_ratio};
use crate::transform::ops::{ImageOps, PixelOps};
use crate::transform::params::ExpandOptions;
use crate::validation::validate_options;

/// 画像のキャンバスを目標アスペクト比まで横方向に拡張する
///
/// ピクセル操作には [`ImageOps`] を使う
pub fn expand(source: &DynamicImage, options: &ExpandOptions) -> ExpandResult<DynamicImage> {
    expand_with(&ImageOps, source, options)
}

/// ピクセル操作の実装を指定してキャンバスを拡張する
///
/// パラメータ・寸法・ジオメトリの検証がすべて通るまでピクセル操作は行わない
pub fn expand_with<O: PixelOps + ?Sized>(
    ops: &O,
    source: &DynamicImage,
    options: &ExpandOptions,
) -> ExpandResult<DynamicImage> {
    validate_options(options)?;
    validate_target_ratio(options.target_ratio)?;

    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(ExpandError::UnreadableDimensions(format!(
            "image has no pixels ({width}x{height})"
        )));
    }

    let geometry = compute_geometry(width, height, options.target_ratio)?;
    warn_on_source_ratio_mismatch(width, height, options.source_ratio);

    tracing::debug!(
        width,
        height,
        new_width = geometry.new_width,
        new_height = geometry.new_height,
        left_padding = geometry.left_padding,
        right_padding = geometry.right_padding,
        strategy = %options.strategy,
        "computed expansion geometry"
    );

    let source = normalize_channels(source);
    let expanded = apply_padding(ops, &source, &geometry, options)?;

    Ok(expanded)
}

/// 8bit RGB / RGBA 以外の画像を変換する（アルファの有無は維持）
fn normalize_channels(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(image),
        other if other.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(other.to_rgba8())),
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    }
}

/// 元画像の実際の比率が指定の比率と大きく異なる場合に警告する（拒否はしない）
fn warn_on_source_ratio_mismatch(width: u32, height: u32, source_ratio: f64) {
    let actual = width as f64 / height as f64;
    if ((actual - source_ratio) / source_ratio).abs() > SOURCE_RATIO_TOLERANCE {
        tracing::warn!(
            actual_ratio = actual,
            source_ratio,
            "source image ratio differs from the stated source ratio"
        );
    }
}

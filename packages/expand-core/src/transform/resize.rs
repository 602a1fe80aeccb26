use crate::constants::MAX_PIXELS;
use crate::errors::CodecError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, RgbImage, RgbaImage};

/// リサイズ方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// 最近傍補間。新しい色を作らない
    Nearest,
    /// Lanczos3 による滑らかな補間。縦横比は指定寸法に合わせて変形する（fill）
    Smooth,
}

impl ResizeMode {
    fn resize_alg(self) -> ResizeAlg {
        match self {
            Self::Nearest => ResizeAlg::Nearest,
            Self::Smooth => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

/// 画像を指定寸法ちょうどにリサイズする
///
/// fast_image_resize を使用。アルファチャンネルがあれば RGBA8、なければ RGB8 で処理する
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
    mode: ResizeMode,
) -> Result<DynamicImage, CodecError> {
    if target_w == 0 || target_h == 0 {
        return Err(CodecError::ProcessingFailed(format!(
            "resize target must not be empty, got {target_w}x{target_h}"
        )));
    }

    // ピクセル数チェック
    let total_pixels = target_w as u64 * target_h as u64;
    if total_pixels > MAX_PIXELS {
        return Err(CodecError::ResolutionTooLarge {
            width: target_w,
            height: target_h,
        });
    }

    let has_alpha = img.color().has_alpha();
    let (pixel_type, raw) = if has_alpha {
        (PixelType::U8x4, img.to_rgba8().into_raw())
    } else {
        (PixelType::U8x3, img.to_rgb8().into_raw())
    };

    let src_image = Image::from_vec_u8(img.width(), img.height(), raw, pixel_type).map_err(|e| {
        CodecError::ProcessingFailed(format!("failed to create source image: {e}"))
    })?;

    let mut dst_image = Image::new(target_w, target_h, pixel_type);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new()
                .resize_alg(mode.resize_alg())
                .use_alpha(mode == ResizeMode::Smooth),
        )
        .map_err(|e| CodecError::ProcessingFailed(format!("resize failed: {e}")))?;

    let raw = dst_image.into_vec();
    let resized = if has_alpha {
        RgbaImage::from_raw(target_w, target_h, raw).map(DynamicImage::ImageRgba8)
    } else {
        RgbImage::from_raw(target_w, target_h, raw).map(DynamicImage::ImageRgb8)
    };

    resized.ok_or_else(|| {
        CodecError::ProcessingFailed("failed to convert resized image".to_string())
    })
}

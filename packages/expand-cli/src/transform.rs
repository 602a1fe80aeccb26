use bytes::Bytes;

use expand_core::{
    auto_orient, decode_image, encode_image, expand, validate_options, validate_target_ratio,
    CodecError, ExpandError, OutputFormat, MAX_PIXELS,
};

use crate::config::Settings;

/// 画像バイト列を読み込み、キャンバスを拡張してエンコードする
///
/// パラメータはデコード前に検証する。エンコードはメモリ上で行い、
/// 書き込みは呼び出し側が成功後にのみ行う
pub fn transform(
    input: &Bytes,
    settings: &Settings,
    format: OutputFormat,
) -> Result<Bytes, ExpandError> {
    validate_settings(settings)?;

    let (img, source_format) = decode_image(input)?;

    // EXIF Orientation を適用し、見た目どおりの幅・高さで拡張する
    let img = if settings.auto_orient {
        auto_orient(img, input).image
    } else {
        img
    };

    let (src_w, src_h) = (img.width(), img.height());
    validate_source_dimensions(src_w, src_h)?;

    tracing::info!(
        width = src_w,
        height = src_h,
        ratio = format_args!("{:.2}", src_w as f64 / src_h.max(1) as f64),
        format = ?source_format,
        "original image size"
    );

    let expanded = expand(&img, &settings.options)?;

    tracing::info!(
        target_ratio = settings.options.target_ratio,
        width = expanded.width(),
        height = expanded.height(),
        strategy = %settings.options.strategy,
        "new image size"
    );

    let output = encode_image(&expanded, format, settings.quality)?;
    Ok(Bytes::from(output))
}

/// ファイル・画像に触れる前に拡張パラメータを検証する
///
/// 比率の不正は `InvalidGeometry`、それ以外は `InvalidOption`
pub fn validate_settings(settings: &Settings) -> Result<(), ExpandError> {
    validate_options(&settings.options)?;
    validate_target_ratio(settings.options.target_ratio)?;
    Ok(())
}

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_source_dimensions(width: u32, height: u32) -> Result<(), ExpandError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(CodecError::ResolutionTooLarge { width, height }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expand_core::{ExpandOptions, PaddingStrategy};
    use image::{DynamicImage, Rgba, RgbaImage};

    fn settings(options: ExpandOptions) -> Settings {
        Settings {
            options,
            quality: 80,
            auto_orient: true,
        }
    }

    fn png_bytes(img: &DynamicImage) -> Bytes {
        Bytes::from(encode_image(img, OutputFormat::Png, 80).unwrap())
    }

    #[test]
    fn test_transform_png_keeps_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 50, Rgba([1, 2, 3, 100])));
        let options = ExpandOptions::default()
            .with_target_ratio(3.0)
            .with_strategy(PaddingStrategy::EdgeExtend);

        let out = transform(&png_bytes(&img), &settings(options), OutputFormat::Png).unwrap();
        let (decoded, _) = decode_image(&out).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (150, 50));
        assert!(decoded.color().has_alpha());
        assert_eq!(decoded.to_rgba8().get_pixel(0, 0), &Rgba([1, 2, 3, 100]));
    }

    #[test]
    fn test_transform_to_jpeg() {
        let img = DynamicImage::new_rgb8(40, 40);
        let out = transform(
            &png_bytes(&img),
            &settings(ExpandOptions::default()),
            OutputFormat::Jpeg,
        )
        .unwrap();
        assert_eq!(&out[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_invalid_options_fail_before_decode() {
        let options = ExpandOptions::default().with_blur_amount(-1.0);
        // デコードできないバイト列でも、先にパラメータエラーになる
        let result = transform(&Bytes::from_static(b"junk"), &settings(options), OutputFormat::Png);
        assert!(matches!(result, Err(ExpandError::InvalidOption(_))));
    }

    #[test]
    fn test_bad_target_ratio_fails_before_decode() {
        for ratio in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let options = ExpandOptions::default().with_target_ratio(ratio);
            let result = transform(
                &Bytes::from_static(b"junk"),
                &settings(options),
                OutputFormat::Png,
            );
            assert!(matches!(result, Err(ExpandError::InvalidGeometry(_))));
        }
    }

    #[test]
    fn test_corrupt_input_is_decode_error() {
        let result = transform(
            &Bytes::from_static(b"junk"),
            &settings(ExpandOptions::default()),
            OutputFormat::Png,
        );
        assert!(matches!(result, Err(ExpandError::Codec(CodecError::Decode(_)))));
    }

    #[test]
    fn test_narrowing_ratio_is_invalid_geometry() {
        let banner = DynamicImage::new_rgb8(1600, 100);
        let result = transform(
            &png_bytes(&banner),
            &settings(ExpandOptions::default()),
            OutputFormat::Png,
        );
        assert!(matches!(result, Err(ExpandError::InvalidGeometry(_))));
    }
}

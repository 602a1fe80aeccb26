use crate::errors::CodecError;
use crate::transform::params::OutputFormat;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use std::io::Cursor;

/// 画像をエンコードする
///
/// quality は JPEG / AVIF のみで使用
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg => {
            // JPEG はアルファ非対応
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| CodecError::Encode(format!("JPEG encode failed: {e}")))?;
        }
        OutputFormat::WebP => {
            // image クレートの WebP エンコーダはロスレスのみ対応（quality は無視）
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| CodecError::Encode(format!("WebP encode failed: {e}")))?;
        }
        OutputFormat::Avif => {
            let encoder = AvifEncoder::new_with_speed_quality(&mut buf, 4, quality);
            img.write_with_encoder(encoder)
                .map_err(|e| CodecError::Encode(format!("AVIF encode failed: {e}")))?;
        }
        OutputFormat::Png | OutputFormat::Bmp | OutputFormat::Tiff | OutputFormat::Gif => {
            img.write_to(&mut buf, format.image_format()).map_err(|e| {
                CodecError::Encode(format!("{:?} encode failed: {e}", format))
            })?;
        }
    }

    Ok(buf.into_inner())
}

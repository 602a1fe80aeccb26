use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::errors::CodecError;

/// 画像バイト列をデコードし、DynamicImage と元のフォーマットを返す
///
/// フォーマットはバイト列の内容から推測する
pub fn decode_image(input: &[u8]) -> Result<(DynamicImage, Option<ImageFormat>), CodecError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(format!("failed to guess format: {e}")))?;

    let source_format = reader.format();

    let img = reader
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    Ok((img, source_format))
}

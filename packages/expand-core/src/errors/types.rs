use thiserror::Error;

/// キャンバス拡張の統合エラー型
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("input not found: {path}")]
    InputNotFound { path: String },

    #[error("unreadable image dimensions: {0}")]
    UnreadableDimensions(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// 画像コーデック・ピクセル操作のエラー
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(
        "invalid region {width}x{height}+{left}+{top} for {image_width}x{image_height} image"
    )]
    InvalidRegion {
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// 拡張処理の Result 型
pub type ExpandResult<T> = Result<T, ExpandError>;

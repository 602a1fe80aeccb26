use std::fmt;
use std::path::Path;

use image::ImageFormat;

use crate::constants::{DEFAULT_BLUR_AMOUNT, DEFAULT_SOURCE_RATIO, DEFAULT_TARGET_RATIO};

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Avif,
    Bmp,
    Tiff,
    Gif,
}

impl OutputFormat {
    /// 文字列（拡張子）から OutputFormat を作成
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "avif" => Some(Self::Avif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// ファイルパスの拡張子から OutputFormat を作成
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
    }

    /// image クレートのフォーマット
    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::WebP => ImageFormat::WebP,
            Self::Avif => ImageFormat::Avif,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::Gif => ImageFormat::Gif,
        }
    }
}

/// パディング方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingStrategy {
    /// 単色で塗りつぶす
    #[default]
    Solid,
    /// 端の 1 列を引き伸ばす
    EdgeExtend,
    /// 端の領域をぼかして引き伸ばす
    Blur,
}

impl PaddingStrategy {
    /// 文字列から PaddingStrategy を作成
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "edge-extend" => Some(Self::EdgeExtend),
            "blur" => Some(Self::Blur),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::EdgeExtend => "edge-extend",
            Self::Blur => "blur",
        }
    }
}

impl fmt::Display for PaddingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// パディング色（Solid のみで使用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingColor {
    #[default]
    Black,
    White,
}

impl PaddingColor {
    /// 文字列から PaddingColor を作成
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "black" => Some(Self::Black),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    /// 不透明な RGBA 値
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            Self::Black => [0, 0, 0, 255],
            Self::White => [255, 255, 255, 255],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for PaddingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 拡張パラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandOptions {
    pub target_ratio: f64,
    /// 参考値。元画像の実際の比率との不一致は警告のみ
    pub source_ratio: f64,
    pub strategy: PaddingStrategy,
    pub color: PaddingColor,
    pub blur_amount: f32,
}

impl ExpandOptions {
    /// 指定された値をデフォルトにマージして作成
    pub fn new(
        target_ratio: Option<f64>,
        source_ratio: Option<f64>,
        strategy: Option<PaddingStrategy>,
        color: Option<PaddingColor>,
        blur_amount: Option<f32>,
    ) -> Self {
        Self {
            target_ratio: target_ratio.unwrap_or(DEFAULT_TARGET_RATIO),
            source_ratio: source_ratio.unwrap_or(DEFAULT_SOURCE_RATIO),
            strategy: strategy.unwrap_or_default(),
            color: color.unwrap_or_default(),
            blur_amount: blur_amount.unwrap_or(DEFAULT_BLUR_AMOUNT),
        }
    }

    pub fn with_strategy(mut self, strategy: PaddingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_color(mut self, color: PaddingColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_target_ratio(mut self, target_ratio: f64) -> Self {
        self.target_ratio = target_ratio;
        self
    }

    pub fn with_blur_amount(mut self, blur_amount: f32) -> Self {
        self.blur_amount = blur_amount;
        self
    }
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

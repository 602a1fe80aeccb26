//! パディング処理が使うピクセル操作
//!
//! 切り出し・リサイズ・ぼかし・合成・キャンバス生成をトレイトにまとめ、
//! 呼び出し側やテストで差し替え・観測できるようにする。
//! すべての操作は新しいバッファを返し、入力は変更しない。

use image::{imageops, DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

use crate::constants::MAX_PIXELS;
use crate::errors::CodecError;
use crate::transform::resize::{resize_image, ResizeMode};

/// チャンネル構成（RGB8 または RGBA8）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    /// 画像のチャンネル構成（アルファの有無で判定）
    pub fn of(image: &DynamicImage) -> Self {
        if image.color().has_alpha() {
            Self::Rgba
        } else {
            Self::Rgb
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// 画像内の矩形領域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// 全高の縦帯
    pub fn column_strip(left: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top: 0,
            width,
            height,
        }
    }

    /// 領域が空でなく、指定サイズの画像に収まっているか検証する
    fn check_within(&self, image_width: u32, image_height: u32) -> Result<(), CodecError> {
        let fits = self.width > 0
            && self.height > 0
            && self.left as u64 + self.width as u64 <= image_width as u64
            && self.top as u64 + self.height as u64 <= image_height as u64;

        if fits {
            Ok(())
        } else {
            Err(CodecError::InvalidRegion {
                left: self.left,
                top: self.top,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            })
        }
    }
}

/// キャンバス生成パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    /// RGBA。RGB キャンバスではアルファは無視される
    pub background: [u8; 4],
}

/// 合成するレイヤー（左上座標で配置）
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub image: &'a DynamicImage,
    pub left: u32,
    pub top: u32,
}

impl<'a> Layer<'a> {
    pub fn at(image: &'a DynamicImage, left: u32) -> Self {
        Self {
            image,
            left,
            top: 0,
        }
    }
}

/// パディング処理が依存するピクセル操作
pub trait PixelOps {
    /// 矩形領域を切り出す。範囲外または空の領域は `InvalidRegion`
    fn extract(&self, image: &DynamicImage, region: Region) -> Result<DynamicImage, CodecError>;

    /// 指定寸法ちょうどにリサイズする
    fn resize(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        mode: ResizeMode,
    ) -> Result<DynamicImage, CodecError>;

    /// ガウシアンぼかし（amount は sigma、0 なら変化なし）
    fn blur(&self, image: &DynamicImage, amount: f32) -> Result<DynamicImage, CodecError>;

    /// レイヤーを順番に重ねる（後のレイヤーが上）。ピクセルはブレンドせず置き換える
    fn composite(
        &self,
        base: DynamicImage,
        layers: &[Layer<'_>],
    ) -> Result<DynamicImage, CodecError>;

    /// 単色のキャンバスを作成する
    fn create_canvas(&self, shape: CanvasSpec) -> Result<DynamicImage, CodecError>;
}

/// image / fast_image_resize によるデフォルト実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageOps;

impl PixelOps for ImageOps {
    fn extract(&self, image: &DynamicImage, region: Region) -> Result<DynamicImage, CodecError> {
        region.check_within(image.width(), image.height())?;
        Ok(image.crop_imm(region.left, region.top, region.width, region.height))
    }

    fn resize(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        mode: ResizeMode,
    ) -> Result<DynamicImage, CodecError> {
        resize_image(image, width, height, mode)
    }

    fn blur(&self, image: &DynamicImage, amount: f32) -> Result<DynamicImage, CodecError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CodecError::ProcessingFailed(format!(
                "blur amount must be non-negative, got {amount}"
            )));
        }

        // sigma 0 は image クレート側で既定値に置き換えられるため自前で素通しする
        if amount == 0.0 {
            return Ok(image.clone());
        }

        Ok(image.blur(amount))
    }

    fn composite(
        &self,
        mut base: DynamicImage,
        layers: &[Layer<'_>],
    ) -> Result<DynamicImage, CodecError> {
        let (base_w, base_h) = (base.width(), base.height());
        for layer in layers {
            Region {
                left: layer.left,
                top: layer.top,
                width: layer.image.width(),
                height: layer.image.height(),
            }
            .check_within(base_w, base_h)?;
        }

        match &mut base {
            DynamicImage::ImageRgb8(canvas) => {
                for layer in layers {
                    let top = layer.image.to_rgb8();
                    imageops::replace(canvas, &top, layer.left.into(), layer.top.into());
                }
            }
            DynamicImage::ImageRgba8(canvas) => {
                for layer in layers {
                    let top = layer.image.to_rgba8();
                    imageops::replace(canvas, &top, layer.left.into(), layer.top.into());
                }
            }
            other => {
                return Err(CodecError::ProcessingFailed(format!(
                    "unsupported canvas pixel layout: {:?}",
                    other.color()
                )));
            }
        }

        Ok(base)
    }

    fn create_canvas(&self, shape: CanvasSpec) -> Result<DynamicImage, CodecError> {
        if shape.width == 0 || shape.height == 0 {
            return Err(CodecError::ProcessingFailed(format!(
                "canvas must not be empty, got {}x{}",
                shape.width, shape.height
            )));
        }

        if shape.width as u64 * shape.height as u64 > MAX_PIXELS {
            return Err(CodecError::ResolutionTooLarge {
                width: shape.width,
                height: shape.height,
            });
        }

        let [r, g, b, a] = shape.background;
        let canvas = match shape.channels {
            Channels::Rgb => {
                DynamicImage::ImageRgb8(RgbImage::from_pixel(shape.width, shape.height, Rgb([r, g, b])))
            }
            Channels::Rgba => DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                shape.width,
                shape.height,
                Rgba([r, g, b, a]),
            )),
        };

        Ok(canvas)
    }
}

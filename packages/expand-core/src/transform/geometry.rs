use crate::constants::MAX_PIXELS;
use crate::errors::{CodecError, ExpandError, ExpandResult};

/// 拡張後のキャンバス寸法と左右のパディング幅
///
/// 高さは常に元画像と同じ。`new_width = left_padding + 元画像幅 + right_padding`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub new_width: u32,
    pub new_height: u32,
    pub left_padding: u32,
    pub right_padding: u32,
}

impl Geometry {
    /// 元画像の幅（パディングを除いた部分）
    pub fn source_width(&self) -> u32 {
        self.new_width - self.left_padding - self.right_padding
    }

    /// 右パディングの開始 x 座標
    pub fn right_offset(&self) -> u32 {
        self.new_width - self.right_padding
    }

    /// パディングが不要か（目標比率が元画像と同じ幅になる場合）
    pub fn is_identity(&self) -> bool {
        self.left_padding == 0 && self.right_padding == 0
    }
}

/// 目標アスペクト比が正の有限値か検証する
///
/// 画像を読み込む前に呼べるよう、寸法計算から切り出している
pub fn validate_target_ratio(target_ratio: f64) -> ExpandResult<()> {
    if !target_ratio.is_finite() || target_ratio <= 0.0 {
        return Err(ExpandError::InvalidGeometry(format!(
            "target ratio must be a positive number, got {target_ratio}"
        )));
    }
    Ok(())
}

/// 目標アスペクト比に対するキャンバス寸法を計算する
///
/// 幅のみ拡張し、縮小（クロップ）は行わない。
/// 合計パディングが奇数の場合、余りの 1px は右側に回す
pub fn compute_geometry(
    original_width: u32,
    original_height: u32,
    target_ratio: f64,
) -> ExpandResult<Geometry> {
    if original_width == 0 || original_height == 0 {
        return Err(ExpandError::InvalidGeometry(format!(
            "source dimensions must be positive, got {original_width}x{original_height}"
        )));
    }

    validate_target_ratio(target_ratio)?;

    let new_height = original_height;
    let new_width = calculate_target_width(new_height, target_ratio)?;

    if new_width < original_width {
        return Err(ExpandError::InvalidGeometry(format!(
            "target ratio {target_ratio} gives width {new_width}, narrower than source width {original_width}"
        )));
    }

    if new_width as u64 * new_height as u64 > MAX_PIXELS {
        return Err(CodecError::ResolutionTooLarge {
            width: new_width,
            height: new_height,
        }
        .into());
    }

    let total_padding = new_width - original_width;
    let left_padding = total_padding / 2;

    Ok(Geometry {
        new_width,
        new_height,
        left_padding,
        right_padding: total_padding - left_padding,
    })
}

/// 高さと比率から幅を求める（四捨五入）
fn calculate_target_width(height: u32, ratio: f64) -> ExpandResult<u32> {
    let width = (height as f64 * ratio).round();

    if width > u32::MAX as f64 {
        return Err(ExpandError::InvalidGeometry(format!(
            "target width {width} overflows"
        )));
    }

    Ok(width as u32)
}

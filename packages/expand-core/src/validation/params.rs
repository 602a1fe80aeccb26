use crate::errors::ExpandError;
use crate::transform::params::{ExpandOptions, PaddingColor, PaddingStrategy};

/// 拡張パラメータを検証する
///
/// 目標比率は寸法計算側で検証する（不正値は `InvalidGeometry`）
pub fn validate_options(options: &ExpandOptions) -> Result<(), ExpandError> {
    // 元画像比率の検証（参考値だが正の有限値であること）
    if !options.source_ratio.is_finite() || options.source_ratio <= 0.0 {
        return Err(ExpandError::InvalidOption(format!(
            "source ratio must be a positive number, got {}",
            options.source_ratio
        )));
    }

    // ぼかし量の検証
    if !options.blur_amount.is_finite() || options.blur_amount < 0.0 {
        return Err(ExpandError::InvalidOption(format!(
            "blur amount must be a non-negative number, got {}",
            options.blur_amount
        )));
    }

    Ok(())
}

/// パディング色の名前を解析する
pub fn parse_color(name: &str) -> Result<PaddingColor, ExpandError> {
    PaddingColor::from_str(name).ok_or_else(|| {
        ExpandError::InvalidOption(format!("color must be black or white, got {name:?}"))
    })
}

/// パディング方式の名前を解析する
pub fn parse_strategy(name: &str) -> Result<PaddingStrategy, ExpandError> {
    PaddingStrategy::from_str(name).ok_or_else(|| {
        ExpandError::InvalidOption(format!(
            "padding strategy must be solid, blur or edge-extend, got {name:?}"
        ))
    })
}

/// 出力品質を検証する
pub fn validate_quality(quality: u8) -> Result<(), ExpandError> {
    if quality == 0 || quality > 100 {
        return Err(ExpandError::InvalidOption(format!(
            "quality must be 1-100, got {quality}"
        )));
    }
    Ok(())
}

/// デフォルトの目標アスペクト比（幅/高さ）
pub const DEFAULT_TARGET_RATIO: f64 = 1.91;

/// デフォルトの元画像アスペクト比（参考値、検証には使わない）
pub const DEFAULT_SOURCE_RATIO: f64 = 16.0;

/// デフォルトのぼかし量（ガウシアンの sigma）
pub const DEFAULT_BLUR_AMOUNT: f32 = 10.0;

/// ぼかし用エッジサンプルの最大幅（px）
pub const MAX_EDGE_SAMPLE_WIDTH: u32 = 20;

/// ぼかし用エッジサンプルの幅 = 元画像幅 / この値（10%）
pub const EDGE_SAMPLE_DIVISOR: u32 = 10;

/// 元画像比率と指定比率のずれの許容範囲（これを超えると警告のみ）
pub const SOURCE_RATIO_TOLERANCE: f64 = 0.01;

/// 画像の最大ピクセル数（1GP = 実質無制限、極端な入力のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// デフォルト品質（1-100）
pub const DEFAULT_QUALITY: u8 = 80;

/// 出力ファイル名に付与するサフィックス
pub const OUTPUT_SUFFIX: &str = "_expanded";

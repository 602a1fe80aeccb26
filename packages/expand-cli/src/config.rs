use std::path::{Path, PathBuf};

use serde::Deserialize;

use expand_core::{
    parse_color, parse_strategy, validate_quality, ExpandError, ExpandOptions, DEFAULT_QUALITY,
};

use crate::args::Cli;

/// 設定ファイル（JSON）の内容
///
/// すべて省略可能。コマンドライン引数・環境変数が優先される
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExpandConfig {
    pub target_ratio: Option<f64>,
    pub source_ratio: Option<f64>,
    pub padding_strategy: Option<String>,
    pub color: Option<String>,
    pub blur_amount: Option<f32>,
    pub quality: Option<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExpandConfig {
    /// 設定ファイルを読み込む
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// 実行時の設定（引数 > 環境変数 > 設定ファイル > デフォルト の順でマージ済み）
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub options: ExpandOptions,
    pub quality: u8,
    pub auto_orient: bool,
}

/// 引数と設定ファイルをマージして検証する
///
/// 色・方式の名前が不正な場合は `InvalidOption`
pub fn resolve_settings(cli: &Cli, config: ExpandConfig) -> Result<Settings, ExpandError> {
    let color = cli
        .color
        .as_deref()
        .or(config.color.as_deref())
        .map(parse_color)
        .transpose()?;

    let strategy = cli
        .padding_strategy
        .as_deref()
        .or(config.padding_strategy.as_deref())
        .map(parse_strategy)
        .transpose()?;

    let options = ExpandOptions::new(
        cli.target_ratio.or(config.target_ratio),
        cli.source_ratio.or(config.source_ratio),
        strategy,
        color,
        cli.blur_amount.or(config.blur_amount),
    );

    let quality = cli.quality.or(config.quality).unwrap_or(DEFAULT_QUALITY);
    validate_quality(quality)?;

    Ok(Settings {
        options,
        quality,
        auto_orient: !cli.no_auto_orient,
    })
}

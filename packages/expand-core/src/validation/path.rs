use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_SUFFIX;
use crate::errors::ExpandError;
use crate::transform::params::OutputFormat;

/// 出力先が省略された場合のパスを作る
///
/// `<入力のディレクトリ>/<入力のファイル名>_expanded<入力の拡張子>`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}

/// 出力パスの拡張子から出力フォーマットを決める
pub fn output_format_for(path: &Path) -> Result<OutputFormat, ExpandError> {
    OutputFormat::from_path(path).ok_or_else(|| {
        ExpandError::InvalidOption(format!(
            "unsupported output format for {}",
            path.display()
        ))
    })
}

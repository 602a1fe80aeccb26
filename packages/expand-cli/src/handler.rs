use std::path::PathBuf;

use expand_core::{default_output_path, output_format_for, CodecError, ExpandError};

use crate::args::Cli;
use crate::config::{resolve_settings, ConfigError, ExpandConfig};
use crate::storage::{read_input, write_output, StorageError};
use crate::transform::{transform, validate_settings};

/// 1 回の拡張を実行し、保存先のパスを返す
///
/// 途中で失敗した場合は何も書き込まない
pub fn run(cli: &Cli) -> Result<PathBuf, AppError> {
    let config = match &cli.config {
        Some(path) => ExpandConfig::load(path)?,
        None => ExpandConfig::default(),
    };
    let settings = resolve_settings(cli, config)?;
    validate_settings(&settings)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let format = output_format_for(&output)?;

    if !cli.input.exists() {
        return Err(ExpandError::InputNotFound {
            path: cli.input.display().to_string(),
        }
        .into());
    }

    tracing::info!(input = %cli.input.display(), "reading input image");
    let input_bytes = read_input(&cli.input)?;

    let output_bytes = transform(&input_bytes, &settings, format)?;

    write_output(&output, &output_bytes)?;
    tracing::info!(path = %output.display(), "saved expanded image");

    Ok(output)
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    TransformFailed(String),
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    /// プロセスの終了コード（エラーはすべて 1）
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<ExpandError> for AppError {
    fn from(err: ExpandError) -> Self {
        match err {
            ExpandError::InputNotFound { path } => {
                tracing::error!(path = %path, "input file does not exist");
                AppError::NotFound(format!("input file '{path}' does not exist"))
            }
            ExpandError::InvalidOption(msg) => {
                tracing::error!(error = %msg, "invalid option");
                AppError::BadRequest(msg)
            }
            ExpandError::InvalidGeometry(msg) => {
                tracing::error!(error = %msg, "invalid geometry");
                AppError::BadRequest(msg)
            }
            ExpandError::UnreadableDimensions(msg) => {
                tracing::error!(error = %msg, "unreadable image dimensions");
                AppError::TransformFailed(msg)
            }
            ExpandError::Codec(codec_err) => codec_err.into(),
        }
    }
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::ResolutionTooLarge { width, height } => {
                tracing::error!(width = %width, height = %height, "image resolution too large");
                AppError::BadRequest(format!("image resolution {width}x{height} is too large"))
            }
            CodecError::Decode(msg) => {
                tracing::error!(error = %msg, "failed to decode input image");
                AppError::TransformFailed(format!("decode failed: {msg}"))
            }
            other => {
                tracing::error!(error = %other, "image processing failed");
                AppError::TransformFailed(other.to_string())
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "file access failed");
        AppError::Storage(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "failed to load config");
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use expand_core::{decode_image, encode_image, OutputFormat};
    use image::{DynamicImage, Rgb, RgbImage};
    use std::fs;

    struct Scratch {
        dir: PathBuf,
    }

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("expand-cli-handler-{}-{name}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn write_png(&self, name: &str, img: &DynamicImage) -> PathBuf {
            let path = self.dir.join(name);
            fs::write(&path, encode_image(img, OutputFormat::Png, 80).unwrap()).unwrap();
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["expand-image"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    fn square() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(100, 100, |x, y| Rgb([x as u8, y as u8, 9])))
    }

    #[test]
    fn test_run_writes_default_output_path() {
        let scratch = Scratch::new("default-output");
        let input = scratch.write_png("banner.png", &square());

        let output = run(&cli(&[input.to_str().unwrap(), "-c", "white"])).unwrap();
        assert_eq!(output, scratch.dir.join("banner_expanded.png"));

        let (img, _) = decode_image(&fs::read(&output).unwrap()).unwrap();
        let img = img.to_rgb8();
        assert_eq!(img.dimensions(), (191, 100));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(45, 7), &Rgb([0, 7, 9]));
    }

    #[test]
    fn test_run_with_explicit_output_and_strategy() {
        let scratch = Scratch::new("explicit-output");
        let input = scratch.write_png("in.png", &square());
        let output = scratch.dir.join("out.bmp");

        let written = run(&cli(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-p",
            "edge-extend",
            "-t",
            "2",
        ]))
        .unwrap();

        assert_eq!(written, output);
        let (img, _) = decode_image(&fs::read(&output).unwrap()).unwrap();
        let img = img.to_rgb8();
        assert_eq!(img.dimensions(), (200, 100));
        assert_eq!(img.get_pixel(10, 30), &Rgb([0, 30, 9]));
        assert_eq!(img.get_pixel(199, 30), &Rgb([99, 30, 9]));
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let scratch = Scratch::new("missing-input");
        let input = scratch.dir.join("nope.png");

        let result = run(&cli(&[input.to_str().unwrap()]));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(!scratch.dir.join("nope_expanded.png").exists());
    }

    #[test]
    fn test_bad_option_reported_before_missing_input() {
        let scratch = Scratch::new("bad-option-missing-input");
        let input = scratch.dir.join("nope.png");

        let result = run(&cli(&[input.to_str().unwrap(), "-b", "-1"]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = run(&cli(&[input.to_str().unwrap(), "-t", "-1"]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_bad_target_ratio_on_corrupt_input() {
        let scratch = Scratch::new("bad-ratio-corrupt");
        let input = scratch.dir.join("junk.png");
        fs::write(&input, b"junk").unwrap();

        let result = run(&cli(&[input.to_str().unwrap(), "-t", "0"]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(!scratch.dir.join("junk_expanded.png").exists());
    }

    #[test]
    fn test_bad_color_writes_nothing() {
        let scratch = Scratch::new("bad-color");
        let input = scratch.write_png("in.png", &square());

        let result = run(&cli(&[input.to_str().unwrap(), "-c", "red"]));
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(!scratch.dir.join("in_expanded.png").exists());
    }

    #[test]
    fn test_narrowing_ratio_writes_nothing() {
        let scratch = Scratch::new("narrowing");
        let input = scratch.write_png("wide.png", &DynamicImage::new_rgb8(160, 10));

        let result = run(&cli(&[input.to_str().unwrap()]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(!scratch.dir.join("wide_expanded.png").exists());
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let scratch = Scratch::new("config");
        let input = scratch.write_png("in.png", &square());
        let config = scratch.dir.join("expand.json");
        fs::write(&config, r#"{"target-ratio": 3.0, "color": "white"}"#).unwrap();

        let output = run(&cli(&[
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]))
        .unwrap();

        let (img, _) = decode_image(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(img.width(), 300);
        assert_eq!(img.to_rgb8().get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_unsupported_output_extension() {
        let scratch = Scratch::new("bad-ext");
        let input = scratch.write_png("in.png", &square());
        let output = scratch.dir.join("out.psd");

        let result = run(&cli(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

//! サンプルのグラデーション画像を作成し、各パディング方式で拡張する
//!
//! 実行: cargo run -p expand-core --example banner_demo [OUTPUT_DIR]

use std::path::PathBuf;

use expand_core::{
    encode_image, expand, ExpandError, ExpandOptions, OutputFormat, PaddingColor, PaddingStrategy,
};
use image::{DynamicImage, Rgb, RgbImage};

/// 青から緑への横グラデーション（2px の白枠付き）
fn create_sample_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        if x < 2 || y < 2 || x + 2 >= width || y + 2 >= height {
            return Rgb([255, 255, 255]);
        }
        let t = x as f64 / width as f64;
        Rgb([
            (255.0 * t) as u8,
            (100.0 + 155.0 * (1.0 - t)) as u8,
            (200.0 * (1.0 - t)) as u8,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demo-output"));
    std::fs::create_dir_all(&out_dir)?;

    let sample = create_sample_image(300, 200);
    let sample_path = out_dir.join("sample_3x2.png");
    std::fs::write(&sample_path, encode_image(&sample, OutputFormat::Png, 80)?)?;
    println!("Created sample image: {} (300x200, 1.5:1)", sample_path.display());

    let variants = [
        ("black", PaddingStrategy::Solid, PaddingColor::Black),
        ("white", PaddingStrategy::Solid, PaddingColor::White),
        ("edge", PaddingStrategy::EdgeExtend, PaddingColor::Black),
        ("blur", PaddingStrategy::Blur, PaddingColor::Black),
    ];

    for (name, strategy, color) in variants {
        let options = ExpandOptions::new(Some(1.91), Some(1.5), Some(strategy), Some(color), None);
        let expanded = expand(&sample, &options)?;
        let path = out_dir.join(format!("sample_expanded_{name}.png"));
        std::fs::write(&path, encode_image(&expanded, OutputFormat::Png, 80)?)?;
        println!(
            "{strategy:>11}: {}x{} -> {}",
            expanded.width(),
            expanded.height(),
            path.display()
        );
    }

    // 16:1 は高さ維持のため 1.91:1 では元画像より狭くなり、拒否される
    let banner = create_sample_image(1600, 100);
    match expand(&banner, &ExpandOptions::default()) {
        Err(ExpandError::InvalidGeometry(msg)) => println!("16:1 banner rejected: {msg}"),
        Err(e) => return Err(e.into()),
        Ok(img) => println!("16:1 banner unexpectedly expanded to {}", img.width()),
    }

    Ok(())
}

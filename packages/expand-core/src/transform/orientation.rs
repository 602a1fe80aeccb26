use image::DynamicImage;

/// 見た目どおりの向きにするための変形
///
/// EXIF Orientation（1〜8）を「時計回りの 90° 回転数」と「回転後の左右反転」に分解して持つ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    /// 変形なし（EXIF 値 1）
    pub const UPRIGHT: Self = Self {
        quarter_turns: 0,
        mirrored: false,
    };

    /// EXIF Orientation タグの値から変形を求める
    pub fn from_exif(value: u32) -> Option<Self> {
        let (quarter_turns, mirrored) = match value {
            1 => (0, false),
            2 => (0, true),
            3 => (2, false),
            4 => (2, true),
            5 => (1, true),
            6 => (1, false),
            7 => (3, true),
            8 => (3, false),
            _ => return None,
        };
        Some(Self {
            quarter_turns,
            mirrored,
        })
    }

    /// 画像バイト列の EXIF から向きを読み取る
    pub fn read(data: &[u8]) -> Option<Self> {
        let mut cursor = std::io::Cursor::new(data);
        let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;

        let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
        Self::from_exif(field.value.get_uint(0)?)
    }

    pub fn is_upright(self) -> bool {
        self == Self::UPRIGHT
    }

    /// 適用すると幅と高さが入れ替わるか
    pub fn swaps_dimensions(self) -> bool {
        self.quarter_turns % 2 == 1
    }

    /// 保存されている寸法から、表示上の寸法（拡張の計算に使う値）を求める
    pub fn oriented_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// 画像に変形を適用する
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        let turned = match self.quarter_turns {
            1 => img.rotate90(),
            2 => img.rotate180(),
            3 => img.rotate270(),
            _ => img,
        };

        if self.mirrored { turned.fliph() } else { turned }
    }
}

/// 向きを正規化した画像
#[derive(Debug, Clone)]
pub struct OrientedImage {
    pub image: DynamicImage,
    pub orientation: Orientation,
}

/// EXIF の向きを読み取り、見た目どおりの向きに正規化する
///
/// 拡張は表示上の幅・高さに対して行うため、デコード直後に適用する。
/// EXIF がない・読めない場合はそのまま返す
pub fn auto_orient(img: DynamicImage, data: &[u8]) -> OrientedImage {
    let orientation = Orientation::read(data).unwrap_or_default();
    if orientation.is_upright() {
        return OrientedImage {
            image: img,
            orientation,
        };
    }

    let (width, height) = orientation.oriented_dimensions(img.width(), img.height());
    tracing::debug!(
        stored_width = img.width(),
        stored_height = img.height(),
        width,
        height,
        orientation = ?orientation,
        "applying EXIF orientation before computing geometry"
    );

    OrientedImage {
        image: orientation.apply(img),
        orientation,
    }
}

// --- 依存モジュール ---

use super::square_grid::SquareGrid;
use image::{Rgb, RgbImage};
use std::fmt;
use std::path::Path;

// --- エラー定義 ---

/// 画像のエンコードや出力時に発生する可能性のあるエラーを定義する列挙型。
#[derive(Debug, PartialEq)]
pub enum RenderError {
    /// PNGへのエンコード、またはファイルへの書き込みに失敗した場合。
    /// 書き込み権限のないパスを指定した場合などが該当します。
    EncodeError(String),
    /// 画像ビューアへの受け渡しに失敗した場合。
    ShowError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EncodeError(s) => {
                write!(f, "画像のエンコードまたは書き込みに失敗しました: {}", s)
            }
            RenderError::ShowError(s) => {
                write!(f, "画像ビューアの起動に失敗しました: {}", s)
            }
        }
    }
}

impl std::error::Error for RenderError {}

// --- 構造体定義 ---

/// バイト値をグレースケールのピクセルとして並べた正方形の画像。
///
/// 線形インデックス i のバイト値 v は、行優先で配置された
/// ピクセル (v, v, v) になります（R・G・Bの3チャネルすべてに同じ値）。
pub struct GrayBitmap {
    dimension: u32,
    image: RgbImage,
}

// --- 実装ブロック ---

impl GrayBitmap {
    /// 切り詰め済みのグリッドから D×D のビットマップを構築します。
    pub fn render(grid: &SquareGrid) -> Self {
        let dimension = grid.dimension();
        let values = grid.values();

        let image = RgbImage::from_fn(dimension, dimension, |x, y| {
            let v = values[(y * dimension + x) as usize];
            Rgb([v, v, v])
        });

        Self { dimension, image }
    }

    /// ビットマップをPNGとして指定されたパスへ保存します。
    ///
    /// # 引数
    /// - `path`: 保存先のファイルパス。拡張子 `.png` を持つことが前提です。
    ///
    /// # 戻り値
    /// - `Ok(())`: 保存に成功した場合。
    /// - `Err(RenderError::EncodeError)`: エンコードまたは書き込みに失敗した場合。
    pub fn save_to_path(&self, path: &Path) -> Result<(), RenderError> {
        self.image
            .save(path)
            .map_err(|e| RenderError::EncodeError(e.to_string()))
    }

    /// ビットマップを一時ファイルに書き出し、プラットフォームの
    /// 画像ビューアに受け渡します。ビューアの終了は待ちません。
    pub fn show(&self) -> Result<(), RenderError> {
        let file = tempfile::Builder::new()
            .prefix("view_rnd_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| RenderError::ShowError(e.to_string()))?;

        // ビューアが開く前に消えないよう、一時ファイルは削除せずに残す。
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| RenderError::ShowError(e.to_string()))?;

        self.save_to_path(&path)?;

        open::that_detached(&path).map_err(|e| RenderError::ShowError(e.to_string()))
    }

    // --- ゲッターメソッド ---

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::byte_source::byte_sequence::ByteSequence;
    use tempfile::tempdir;

    /// 既知の4バイトから 2x2 のグレースケール画像ができることをテスト
    #[test]
    fn render_maps_bytes_to_grayscale_pixels_row_major() {
        let grid = SquareGrid::new(ByteSequence::new(vec![10, 20, 30, 40]), false);
        let bitmap = GrayBitmap::render(&grid);

        assert_eq!(bitmap.dimension(), 2);
        assert_eq!(bitmap.image().get_pixel(0, 0), &Rgb([10, 10, 10]));
        assert_eq!(bitmap.image().get_pixel(1, 0), &Rgb([20, 20, 20]));
        assert_eq!(bitmap.image().get_pixel(0, 1), &Rgb([30, 30, 30]));
        assert_eq!(bitmap.image().get_pixel(1, 1), &Rgb([40, 40, 40]));
    }

    /// 保存したPNGを読み戻したとき、ピクセルが完全に一致することをテスト
    #[test]
    fn saved_png_decodes_to_identical_pixels() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("gray.png");

        let grid = SquareGrid::new(ByteSequence::new((0u8..9).collect()), false);
        let bitmap = GrayBitmap::render(&grid);
        bitmap.save_to_path(&path).expect("save should succeed");

        let decoded = image::open(&path).expect("PNGの読み戻しに失敗").to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 3));
        for y in 0..3u32 {
            for x in 0..3u32 {
                let v = (y * 3 + x) as u8;
                assert_eq!(decoded.get_pixel(x, y), &Rgb([v, v, v]));
            }
        }
    }

    /// 書き込めないパスでエラーが返されるかテスト
    #[test]
    fn save_to_unwritable_path_returns_encode_error() {
        let grid = SquareGrid::new(ByteSequence::new(vec![1, 2, 3, 4]), false);
        let bitmap = GrayBitmap::render(&grid);

        let result = bitmap.save_to_path(Path::new(
            "no_such_directory_for_view_rnd/out.png",
        ));

        assert!(matches!(result, Err(RenderError::EncodeError(_))));
    }
}

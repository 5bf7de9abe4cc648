use super::GEN_DIM;
use std::path::{Path, PathBuf};

/// バイト列の入手元を表現する列挙型。
/// 入力ファイル、一様乱数、低品質LCGのいずれか1つが1回の実行で有効になる。
#[derive(Debug, PartialEq)]
pub enum GenerationMode {
    /// 指定されたファイルの内容をそのまま使う。
    FromFile(PathBuf),
    /// 一様乱数で指定された個数のバイトを生成する。
    UniformRandom(usize),
    /// 低品質なLCGで指定された個数のバイトを生成する。
    WeakLcg(usize),
}

impl GenerationMode {
    /// コマンドライン引数から生成モードを決定します。
    ///
    /// 優先順位は「入力ファイル > 低品質LCG > 一様乱数」で固定です。
    /// `dimension` は生成モードでのみ意味を持ち、一辺 `d` に対して
    /// `d * d` バイトを生成します。ファイル入力ではファイルサイズが
    /// 長さを決めるため、`dimension` は無視されます。
    ///
    /// # 引数
    /// * `infile`: 入力ファイルのパス（`--infile`）。
    /// * `crap`: 低品質LCGを使うかどうか（`--crap`）。
    /// * `dimension`: 生成する画像の一辺のピクセル数（`--dimension`）。
    pub fn resolve(infile: Option<&Path>, crap: bool, dimension: Option<u32>) -> Self {
        if let Some(path) = infile {
            return GenerationMode::FromFile(path.to_path_buf());
        }

        let count = Self::synthetic_count(dimension);
        if crap {
            GenerationMode::WeakLcg(count)
        } else {
            GenerationMode::UniformRandom(count)
        }
    }

    /// 生成モードで作るバイト数を決定します。
    /// 一辺の指定がなければデフォルトの GEN_DIM (1024) を使います。
    fn synthetic_count(dimension: Option<u32>) -> usize {
        let side = dimension.unwrap_or(GEN_DIM) as usize;
        side * side
    }
}

// --- テストモジュール ---

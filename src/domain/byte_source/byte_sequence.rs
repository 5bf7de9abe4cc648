use super::generation_mode::GenerationMode;
use super::source_error::SourceError;
use super::weak_lcg::WeakLcg;
use rand::Rng;
use std::fs;
use std::path::Path;

// --- 構造体定義 ---

/// 画像の元になる、順序付きの符号なし8ビット整数列。
///
/// ファイルの読み込み、または乱数生成によってのみ作られます。
/// 一度作られた後は変更されず、1回のパイプライン実行の中でのみ
/// 所有され、画像の構築が終われば破棄されます。
#[derive(Debug, PartialEq)]
pub struct ByteSequence {
    values: Vec<u8>,
}

// --- 実装ブロック ---

impl ByteSequence {
    /// 既存のバイト列から直接インスタンスを作成（コンストラクタ）。
    pub fn new(values: Vec<u8>) -> Self {
        Self { values }
    }

    /// 生成モードに応じてバイト列を入手します。
    ///
    /// # 引数
    /// * `mode`: 解決済みの生成モード（`GenerationMode`）。
    /// * `verbose`: 進行メッセージを標準出力へ表示するかどうか。
    ///
    /// # 戻り値
    /// * `Ok(ByteSequence)`: バイト列の入手に成功した場合。
    /// * `Err(SourceError)`: 入力ファイルが読み込めなかった場合。
    pub fn obtain(mode: &GenerationMode, verbose: bool) -> Result<Self, SourceError> {
        match mode {
            GenerationMode::FromFile(path) => Self::from_file(path, verbose),
            GenerationMode::UniformRandom(count) => Ok(Self::uniform_random(*count, verbose)),
            GenerationMode::WeakLcg(count) => Ok(Self::weak_lcg(*count, verbose)),
        }
    }

    /// ファイルの内容をすべて読み込んでバイト列にします。
    /// ここでは切り詰めは行わず、長さはファイルサイズそのままです。
    pub fn from_file(path: &Path, verbose: bool) -> Result<Self, SourceError> {
        if verbose {
            println!("ファイル {} からデータを読み込みます。", path.display());
        }

        // fs::read はファイルのオープンとクローズを内部で行うため、
        // 読み込みに失敗してもハンドルは確実に解放される。
        let values = fs::read(path).map_err(|e| SourceError::FileRead {
            path: path.to_path_buf(),
            cause: e,
        })?;

        Ok(Self { values })
    }

    /// 一様乱数で指定された個数のバイトを生成します。
    /// シードは公開されないため、実行のたびに結果は変わります。
    pub fn uniform_random(count: usize, verbose: bool) -> Self {
        if verbose {
            println!("{} 個の乱数値を生成します。", count);
        }

        let mut rng = rand::thread_rng();
        let values = (0..count).map(|_| rng.gen::<u8>()).collect();
        Self { values }
    }

    /// 低品質なLCGで指定された個数のバイトを生成します。
    /// 初期状態は乱数でシードされます。
    pub fn weak_lcg(count: usize, verbose: bool) -> Self {
        if verbose {
            println!("{} 個の低品質な乱数値を生成します。", count);
        }

        let mut lcg = WeakLcg::from_entropy();
        let values = (0..count).map(|_| lcg.next_byte()).collect();
        Self { values }
    }

    // --- 便利メソッド ---

    /// 保持しているバイト数を返します。
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// バイト列が空かどうか。
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // --- ゲッターメソッド ---

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// 内部のバイト列の所有権を取り出します。
    pub fn into_values(self) -> Vec<u8> {
        self.values
    }
}

// --- テストモジュール ---

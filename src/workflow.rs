//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 「バイト列の入手 → 平方への切り詰め → 描画 → 出力」という
//! 処理フローを実装します。

use crate::cli::Args;
use crate::domain::byte_source::byte_sequence::ByteSequence;
use crate::domain::byte_source::generation_mode::GenerationMode;
use crate::domain::square_image::gray_bitmap::GrayBitmap;
use crate::domain::square_image::square_grid::SquareGrid;
use crate::error::AppError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: すべての処理が正常に完了した場合。
/// * `Err(AppError)`: 処理中に回復不可能なエラーが発生した場合。
///   このツールに部分的な失敗やリトライはなく、すべてのエラーは
///   その実行を終了させます。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 入力の選択を検証
    // 入力ファイルもテストモードも指定されていなければ、
    // 何の処理も行わずに使い方エラーとする。
    if args.infile.is_none() && !args.test {
        return Err(AppError::Usage);
    }

    if args.verbose {
        match &args.infile {
            Some(path) => println!("ファイル {} を元に画像を生成します。", path.display()),
            None => println!("乱数生成器の値を元に画像を生成します。"),
        }
    }

    // 2. 生成モードの解決
    // 優先順位（ファイル > 低品質LCG > 一様乱数）は
    // GenerationMode::resolve に集約されている。
    let mode = GenerationMode::resolve(args.infile.as_deref(), args.crap, args.dimension);

    // 3. バイト列の入手
    let sequence = ByteSequence::obtain(&mode, args.verbose)?;

    // 4. 最大の平方数の長さへ切り詰め
    let grid = SquareGrid::new(sequence, args.verbose);

    // 5. 空入力の判定
    // 寸法0の画像はPNGとして成立しないため、ここで明示的にエラーにする。
    if grid.is_empty() {
        let source = match &mode {
            GenerationMode::FromFile(path) => path.display().to_string(),
            _ => "乱数生成器".to_string(),
        };
        return Err(AppError::EmptyInput(source));
    }

    // 6. グレースケール画像の構築
    let bitmap = GrayBitmap::render(&grid);

    // 7. 出力先の解決と出力
    match EmitTarget::resolve(args.show, args.outfile.as_deref(), args.infile.as_deref()) {
        EmitTarget::Display => {
            // 表示モードではファイルへの書き込みは一切行わない。
            bitmap.show()?;
        }
        EmitTarget::Save(path) => {
            bitmap.save_to_path(&path)?;
            if args.verbose {
                println!("画像を {} に保存しました。", path.display());
            }
        }
    }

    Ok(())
}

// --- 出力先の解決 ---

/// 生成した画像の出力先を表現する列挙型。
/// 表示（ファイルへは書き込まない）か、パスへの保存のどちらか。
#[derive(Debug, PartialEq)]
pub enum EmitTarget {
    Display,
    Save(PathBuf),
}

impl EmitTarget {
    /// コマンドライン引数から出力先を決定します。
    ///
    /// `--show` が指定されていれば、`--outfile` の有無に関わらず表示のみ。
    /// 保存の場合のベース名は「明示された出力パス > 入力パス > 固定名」の
    /// 優先順位で決まり、明示パスと入力パスにはそのまま ".png" を付加します。
    pub fn resolve(show: bool, outfile: Option<&Path>, infile: Option<&Path>) -> Self {
        if show {
            return EmitTarget::Display;
        }

        let base = match (outfile, infile) {
            (Some(out), _) => out.as_os_str().to_os_string(),
            (None, Some(input)) => input.as_os_str().to_os_string(),
            (None, None) => return EmitTarget::Save(PathBuf::from("no_name_generated_rnd.png")),
        };

        EmitTarget::Save(append_png_suffix(base))
    }
}

/// パス全体の末尾に ".png" を付加します。
/// 拡張子の置き換えではなく付加なので、`data.bin` は `data.bin.png` になる。
fn append_png_suffix(mut base: OsString) -> PathBuf {
    base.push(".png");
    PathBuf::from(base)
}

// --- テストモジュール ---

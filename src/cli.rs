use clap::Parser;
use std::path::PathBuf;

/// ランダムデータのバイト列をグレースケールの正方形画像として可視化するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 画像の生成に使うランダム値の入ったファイル
    #[arg(short, long)]
    pub infile: Option<PathBuf>,

    /// 生成した画像の書き込み先のベース名（".png" が付加される）。
    /// 指定がなければ INFILE.png が使われる
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// 詳細な進行メッセージを標準出力へ表示する
    #[arg(short, long)]
    pub verbose: bool,

    /// 入力ファイルなしで、乱数生成器によるテスト生成を許可する
    #[arg(short, long)]
    pub test: bool,

    /// 通常の乱数生成器の代わりに、Numerical Recipes 由来の
    /// 低品質なLCG生成器を使う（生成モードでのみ有効）
    #[arg(short, long)]
    pub crap: bool,

    /// 生成する画像の一辺のピクセル数（N^2 バイトを生成）。
    /// デフォルトは 1024。ファイル入力時は無視される
    #[arg(short, long)]
    pub dimension: Option<u32>,

    /// 生成した画像を保存せずに表示する
    #[arg(short, long)]
    pub show: bool,
}

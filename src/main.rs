mod cli;
mod domain;
mod error;
mod workflow;

use clap::Parser;

fn main() {
    // コマンドライン引数を解析します（--version はここで処理されて終了コード0）
    let args = cli::Args::parse();

    // メインロジックを実行し、エラーは種類を問わず
    // メッセージを表示して終了コード1で終了します。
    if let Err(e) = workflow::run(args) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

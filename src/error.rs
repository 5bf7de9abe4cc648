use crate::domain::byte_source::source_error::SourceError;
use crate::domain::square_image::gray_bitmap::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("入力ファイルが指定されておらず、テストモード (--test) でもありません。")]
    Usage,

    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("バイト列の取得に失敗しました: {0}")]
    Source(#[from] SourceError),

    #[error("画像の出力に失敗しました: {0}")]
    Render(#[from] RenderError),

    #[error("入力データが空のため、画像を生成できません: {0}")]
    EmptyInput(String),
}

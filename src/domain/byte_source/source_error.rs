use std::fmt;
use std::path::PathBuf;

// バイト列取得時のエラー型を定義
#[derive(Debug)]
pub enum SourceError {
    FileRead {
        path: PathBuf,
        cause: std::io::Error,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::FileRead { path, cause } => {
                write!(
                    f,
                    "ファイル '{}' を読み込めませんでした: {}",
                    path.display(),
                    cause
                )
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::FileRead { cause, .. } => Some(cause),
        }
    }
}

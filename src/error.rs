use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("アップロードに失敗しました（詳細はログを参照）")]
    SubmitFailed,

    #[error(transparent)]
    Common(#[from] resume_match_common::Error),
}

pub type Result<T> = std::result::Result<T, ResumeMatchError>;

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// サーバーが2xx以外を返した
    #[error("Error: {status_text} (HTTP {status})")]
    Http { status: u16, status_text: String },

    /// 接続失敗・切断など
    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("履歴書と求人票の両方を選択してください")]
    IncompleteForm,
}

impl Error {
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Error::Http {
            status,
            status_text: status_text.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

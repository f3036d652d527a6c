//! マッチングサーバーへのアップロード
//!
//! 履歴書と求人票を multipart/form-data で1回POSTし、
//! 返ってきた照合結果をフォームに反映する。

use crate::error::{ResumeMatchError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use resume_match_common::{parse_upload_response, Error, MatchForm, UploadResponse};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

/// 送信用に読み込んだファイル
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ResumeMatchError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self { file_name, bytes })
    }
}

/// HTTPクライアント（`None` ならタイムアウトなし）
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::Network(e.to_string()).into())
}

/// フォームの内容から multipart ボディを組み立てる
pub fn build_multipart(form: &MatchForm<UploadFile>) -> Form {
    form.parts().fold(Form::new(), |body, (field, file)| {
        body.part(
            field,
            Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
        )
    })
}

/// 1回だけPOSTしてレスポンスをパースする
///
/// フォームの状態は変更しない
pub async fn upload(
    client: &Client,
    endpoint: &str,
    form: &MatchForm<UploadFile>,
) -> resume_match_common::Result<UploadResponse> {
    form.ensure_ready()?;

    debug!(
        endpoint,
        resumes = form.resumes().len(),
        "アップロード開始"
    );

    let response = client
        .post(endpoint)
        .multipart(build_multipart(form))
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::http(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    parse_upload_response(&body)
}

/// 送信してレスポンスをそのまま返す
///
/// 失敗はログに出して `None`。フォームの照合結果には触れない。
pub async fn fetch_response(
    client: &Client,
    endpoint: &str,
    form: &MatchForm<UploadFile>,
) -> Option<UploadResponse> {
    match upload(client, endpoint, form).await {
        Ok(response) => {
            info!(count = response.matches().len(), "照合結果を受信");
            Some(response)
        }
        Err(e) => {
            error!("Upload failed: {}", e);
            None
        }
    }
}

/// 送信して結果をフォームへ反映する
///
/// 失敗はすべてここでログに出して握りつぶし、照合結果は前回のまま残す。
/// 結果を更新できたら `true`。
pub async fn submit(client: &Client, endpoint: &str, form: &mut MatchForm<UploadFile>) -> bool {
    let outcome = upload(client, endpoint, form).await;

    match form.apply_outcome(outcome) {
        Ok(count) => {
            info!(count, "照合結果を受信");
            true
        }
        Err(e) => {
            error!("Upload failed: {}", e);
            false
        }
    }
}

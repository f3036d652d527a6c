//! アップロードフォームの状態
//!
//! 選択中の履歴書・求人票と、直近の照合結果を保持する。
//! ファイルハンドルの型 `F` はプラットフォームごとに異なる
//! （Web: `web_sys::File`、CLI: ディスクから読んだバイト列）。

use crate::error::{Error, Result};
use crate::types::{MatchRecord, UploadResponse};

/// 既定の送信先
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload-resumes";

/// 履歴書のmultipartフィールド名
pub const RESUMES_FIELD: &str = "resumes";

/// 求人票のmultipartフィールド名
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Clone)]
pub struct MatchForm<F> {
    resumes: Vec<F>,
    job_description: Option<F>,
    matches: Vec<MatchRecord>,
}

impl<F> Default for MatchForm<F> {
    fn default() -> Self {
        Self {
            resumes: Vec::new(),
            job_description: None,
            matches: Vec::new(),
        }
    }
}

impl<F> MatchForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 履歴書の選択を丸ごと置き換える（追加ではない）
    pub fn set_resumes(&mut self, files: Vec<F>) {
        self.resumes = files;
    }

    /// 求人票を置き換える
    ///
    /// ファイル選択は常にシーケンスで届くので先頭だけを採用する。
    /// 空なら未選択に戻る。
    pub fn set_job_description(&mut self, files: Vec<F>) {
        self.job_description = files.into_iter().next();
    }

    pub fn resumes(&self) -> &[F] {
        &self.resumes
    }

    pub fn job_description(&self) -> Option<&F> {
        self.job_description.as_ref()
    }

    /// 直近の照合結果
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// 履歴書1件以上 + 求人票ありで送信可能
    pub fn can_submit(&self) -> bool {
        !self.resumes.is_empty() && self.job_description.is_some()
    }

    pub fn ensure_ready(&self) -> Result<()> {
        if self.can_submit() {
            Ok(())
        } else {
            Err(Error::IncompleteForm)
        }
    }

    /// multipartに載せる順序でパートを列挙
    ///
    /// 履歴書を選択順に `resumes` で、続けて求人票があれば `job_description` で。
    pub fn parts(&self) -> impl Iterator<Item = (&'static str, &F)> {
        self.resumes
            .iter()
            .map(|file| (RESUMES_FIELD, file))
            .chain(self.job_description.iter().map(|file| (JOB_DESCRIPTION_FIELD, file)))
    }

    /// 成功レスポンスで結果を丸ごと置き換える
    ///
    /// `top_matches` が無ければ空になる。置き換え後の件数を返す。
    pub fn apply_response(&mut self, response: UploadResponse) -> usize {
        self.matches = response.into_matches();
        self.matches.len()
    }

    /// 送信結果を反映する
    ///
    /// 失敗時は結果を変更せずにエラーをそのまま返す。
    pub fn apply_outcome(&mut self, outcome: Result<UploadResponse>) -> Result<usize> {
        let response = outcome?;
        Ok(self.apply_response(response))
    }
}

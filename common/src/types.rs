//! マッチング結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - MatchRecord: 1件の照合結果（ファイル名 + 類似度）
//! - UploadResponse: `/upload-resumes` のレスポンス全体

use serde::{Deserialize, Serialize};

/// 照合結果1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 履歴書のファイル名
    pub filename: String,

    /// 求人票との類似度（単位なし、通常 0〜1）
    pub similarity: f64,
}

impl MatchRecord {
    pub fn new(filename: impl Into<String>, similarity: f64) -> Self {
        Self {
            filename: filename.into(),
            similarity,
        }
    }

    /// 表示用の類似度（小数点以下2桁）
    pub fn similarity_display(&self) -> String {
        format!("{:.2}", self.similarity)
    }
}

/// アップロードAPIのレスポンス
///
/// `top_matches` 以外はサーバー実装によって返ったり返らなかったりするので
/// すべて省略可能として扱う
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_matches: Option<Vec<MatchRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// サーバー側で保存された履歴書のパス
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resumes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl UploadResponse {
    /// 照合結果（`top_matches` 省略時は空）
    pub fn matches(&self) -> &[MatchRecord] {
        self.top_matches.as_deref().unwrap_or(&[])
    }

    pub fn into_matches(self) -> Vec<MatchRecord> {
        self.top_matches.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_display_two_decimals() {
        assert_eq!(MatchRecord::new("a.pdf", 0.91).similarity_display(), "0.91");
        assert_eq!(MatchRecord::new("b.pdf", 0.9).similarity_display(), "0.90");
        assert_eq!(MatchRecord::new("c.pdf", 0.87654).similarity_display(), "0.88");
        assert_eq!(MatchRecord::new("d.pdf", 1.0).similarity_display(), "1.00");
    }

    #[test]
    fn test_match_record_deserialize() {
        let json = r#"{"filename": "tanaka.pdf", "similarity": 0.734}"#;

        let record: MatchRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.filename, "tanaka.pdf");
        assert!((record.similarity - 0.734).abs() < f64::EPSILON);
    }

    #[test]
    fn test_match_record_integer_similarity() {
        // JSONの整数もf64として受け付ける
        let record: MatchRecord =
            serde_json::from_str(r#"{"filename": "x.docx", "similarity": 1}"#).unwrap();
        assert_eq!(record.similarity, 1.0);
    }

    #[test]
    fn test_upload_response_with_matches() {
        let json = r#"{
            "top_matches": [
                {"filename": "a.pdf", "similarity": 0.91},
                {"filename": "b.pdf", "similarity": 0.42}
            ]
        }"#;

        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.matches().len(), 2);
        assert_eq!(response.matches()[0].filename, "a.pdf");
        assert_eq!(response.matches()[1].filename, "b.pdf");
    }

    #[test]
    fn test_upload_response_missing_matches() {
        let json = r#"{
            "message": "Files uploaded successfully",
            "resumes": ["uploads/a.pdf"],
            "job_description": "uploads/jd.pdf"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.matches().is_empty());
        assert_eq!(response.message.as_deref(), Some("Files uploaded successfully"));
        assert_eq!(response.resumes, vec!["uploads/a.pdf".to_string()]);
        assert_eq!(response.job_description.as_deref(), Some("uploads/jd.pdf"));
        assert!(response.into_matches().is_empty());
    }

    #[test]
    fn test_upload_response_null_matches() {
        let response: UploadResponse = serde_json::from_str(r#"{"top_matches": null}"#).unwrap();
        assert!(response.matches().is_empty());
    }

    #[test]
    fn test_upload_response_ignores_unknown_fields() {
        let json = r#"{"top_matches": [], "elapsed_ms": 120}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.top_matches, Some(vec![]));
    }

    #[test]
    fn test_upload_response_serialize_skips_empty() {
        let response = UploadResponse {
            top_matches: Some(vec![MatchRecord::new("a.pdf", 0.5)]),
            ..Default::default()
        };

        let json = serde_json::to_string(&response).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"top_matches":[{"filename":"a.pdf","similarity":0.5}]}"#);
    }
}

//! APIレスポンスパーサー

use crate::error::Result;
use crate::types::UploadResponse;

/// `/upload-resumes` のレスポンスボディをパース
///
/// # Arguments
/// * `body` - レスポンスボディ（JSONオブジェクト）
///
/// # Returns
/// * `Ok(UploadResponse)` - パース成功（`top_matches` 省略も成功扱い）
/// * `Err(Error::Json)` - JSONとして不正、またはオブジェクトの形が合わない
///
/// # Examples
/// ```
/// use resume_match_common::parse_upload_response;
///
/// let body = r#"{"top_matches": [{"filename": "a.pdf", "similarity": 0.91}]}"#;
/// let response = parse_upload_response(body).unwrap();
/// assert_eq!(response.matches()[0].similarity_display(), "0.91");
/// ```
pub fn parse_upload_response(body: &str) -> Result<UploadResponse> {
    let response: UploadResponse = serde_json::from_str(body.trim())?;
    Ok(response)
}

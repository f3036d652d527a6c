//! マッチングサーバーへのアップロード（fetch + FormData）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use resume_match_common::{parse_upload_response, Error, MatchForm, Result, UploadResponse};

fn js_error(value: JsValue) -> Error {
    Error::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// フォームの内容から FormData を組み立てる
///
/// 元のファイル名を付けて `resumes` / `job_description` に追加する
pub fn build_form_data(form: &MatchForm<File>) -> Result<FormData> {
    let data = FormData::new().map_err(js_error)?;
    for (field, file) in form.parts() {
        data.append_with_blob_and_filename(field, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(data)
}

/// 1回だけPOSTしてレスポンスをパースする
pub async fn upload(endpoint: &str, form: &MatchForm<File>) -> Result<UploadResponse> {
    form.ensure_ready()?;
    let body = build_form_data(form)?;

    // Content-Type は boundary 付きでブラウザが設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    read_response(&resp).await
}

/// fetch のレスポンスを検査してパースする
///
/// 2xx以外は `Error::Http`（ステータスとステータステキスト）
pub async fn read_response(resp: &Response) -> Result<UploadResponse> {
    if !resp.ok() {
        return Err(Error::http(resp.status(), resp.status_text()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    parse_upload_response(&text.as_string().unwrap_or_default())
}

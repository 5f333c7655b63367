//! Gemini API連携
//!
//! 選択画像のData URLを分解し、解析リクエストを送信して
//! 検証済みの AnalysisResult を返す。リトライはしない（1回のみ）。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use anemia_ai_common::{
    build_analysis_request, validate_response, AnalysisResult, Error, GeminiRequest,
    GeminiResponse, GEMINI_MODEL,
};

/// generateContent エンドポイント
fn api_url() -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        GEMINI_MODEL
    )
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

fn js_error(context: &str, e: JsValue) -> Error {
    Error::Api(format!("{}: {:?}", context, e))
}

/// Gemini API呼び出し
///
/// 非2xxはレスポンス本文を読んでエラー分類する
/// （キー不正マーカーの検出は Error::from_api_response が行う）
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, Error> {
    let url = format!("{}?key={}", api_url(), api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| Error::Api(format!("request serialize: {}", e)))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| js_error("request init", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("request headers", e))?;

    let window = web_sys::window().ok_or_else(|| Error::Api("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("response cast", e))?;

    if !resp.ok() {
        let status = resp.status();
        let body_text = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(Error::from_api_response(status, &body_text));
    }

    let json = JsFuture::from(resp.json().map_err(|e| js_error("response json", e))?)
        .await
        .map_err(|e| js_error("response body", e))?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Api(format!("response decode: {}", e)))?;

    response
        .first_text()
        .map(|t| t.to_string())
        .ok_or_else(|| Error::Api("empty response".to_string()))
}

/// 画像1枚を解析する
///
/// Data URL分解 → リクエスト構築 → API呼び出し → レスポンス検証、
/// の順で進め、失敗はすべて Error として呼び出し元へ返す
pub async fn analyze_image(api_key: &str, data_url: &str) -> Result<AnalysisResult, Error> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::Encoding("Data URLからBase64を抽出できません".to_string()))?;
    let mime_type = extract_mime_type_from_data_url(data_url);

    let request = build_analysis_request(base64_data, mime_type);
    let response_text = call_gemini_api(api_key, &request).await?;

    validate_response(&response_text)
}

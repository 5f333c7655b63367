//! APIレスポンスパーサー
//!
//! モデルのレスポンステキストからJSONオブジェクトを抽出し、
//! RawAnalysisResult にパースする

use crate::error::{Error, Result};
use crate::types::RawAnalysisResult;

/// レスポンステキストからJSON部分を抽出
///
/// responseMimeType で application/json を要求していても、
/// コードフェンスや前後の説明文が混ざることがある。
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 解析レスポンスをパース
///
/// JSON抽出とデシリアライズのみ行い、値の検証はしない。
/// 検証は normalizer::normalize が担当する。
pub fn parse_analysis_response(response: &str) -> Result<RawAnalysisResult> {
    let json_str = extract_json(response)?;
    let raw: RawAnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("解析結果のJSONパースエラー: {}", e)))?;
    Ok(raw)
}

//! レスポンス検証パイプラインの統合テスト
//!
//! モデルのレスポンステキストを受け取ってから
//! UIへ渡せる結果になるまでを公開APIだけで検証する

use anemia_ai_common::{
    validate_response, ConfidenceLevel, Error, ImageQuality, PallorGrade,
};

/// 正常系: スキーマ通りのレスポンスは無変更で通る
#[test]
fn test_valid_response_passes_unchanged() {
    let response = r#"{
        "summary": "x",
        "confidence": "Medium",
        "imageQuality": "Good",
        "reasoning": "y",
        "pallorGrade": "Grade 2 (Moderate)"
    }"#;

    let result = validate_response(response).unwrap();
    assert_eq!(result.summary, "x");
    assert_eq!(result.reasoning, "y");
    assert_eq!(result.confidence, ConfidenceLevel::Medium);
    assert_eq!(result.image_quality, ImageQuality::Good);
    assert_eq!(result.pallor_grade, PallorGrade::Grade2);
}

/// Poor画質ならモデルの返したグレード・確信度を捨てる
#[test]
fn test_poor_quality_response_is_overridden() {
    let response = r#"{
        "summary": "x",
        "confidence": "High",
        "imageQuality": "Poor",
        "reasoning": "y",
        "pallorGrade": "Grade 3 (Severe)"
    }"#;

    let result = validate_response(response).unwrap();
    assert_eq!(result.image_quality, ImageQuality::Poor);
    assert_eq!(result.confidence, ConfidenceLevel::Indeterminate);
    assert_eq!(result.pallor_grade, PallorGrade::NotAssessable);
    // 自由テキストは上書きの影響を受けない
    assert_eq!(result.summary, "x");
    assert_eq!(result.reasoning, "y");
}

/// コードフェンス付きレスポンスも通る
#[test]
fn test_fenced_response() {
    let response = r#"Here is my analysis:
```json
{
  "summary": "Mild pallor.",
  "confidence": "Low",
  "imageQuality": "Good",
  "reasoning": "Slightly pale.",
  "pallorGrade": "Grade 1 (Mild)"
}
```"#;

    let result = validate_response(response).unwrap();
    assert_eq!(result.pallor_grade, PallorGrade::Grade1);
    assert_eq!(result.confidence, ConfidenceLevel::Low);
}

/// 未知の列挙値はフィールドごとの固定フォールバックへ
#[test]
fn test_unknown_enum_values_fall_back() {
    let response = r#"{
        "summary": "x",
        "confidence": "Very High",
        "imageQuality": "Acceptable",
        "reasoning": "y",
        "pallorGrade": "Grade 4"
    }"#;

    let result = validate_response(response).unwrap();
    assert_eq!(result.confidence, ConfidenceLevel::Indeterminate);
    assert_eq!(result.image_quality, ImageQuality::Uncertain);
    assert_eq!(result.pallor_grade, PallorGrade::NotAssessable);
}

/// フィールド欠落はフォールバック値で埋まり、エラーにならない
#[test]
fn test_missing_fields_do_not_fail() {
    let response = r#"{"summary": "only summary"}"#;

    let result = validate_response(response).unwrap();
    assert_eq!(result.summary, "only summary");
    assert_eq!(result.reasoning, "");
    assert_eq!(result.confidence, ConfidenceLevel::Indeterminate);
    assert_eq!(result.image_quality, ImageQuality::Uncertain);
    assert_eq!(result.pallor_grade, PallorGrade::NotAssessable);
}

/// パース不能なレスポンスはParseエラー（panicしない）
#[test]
fn test_malformed_response_is_parse_error() {
    for response in [
        "I cannot analyze this image.",
        "",
        "```json\nnot json\n```",
        "{\"summary\": ",
    ] {
        let result = validate_response(response);
        match result {
            Err(Error::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }
}

/// Parseエラーは再試行を促す文言、キー不正は別文言
#[test]
fn test_error_messages_for_ui() {
    let parse_err = validate_response("no json").unwrap_err();
    assert_eq!(
        parse_err.user_message(),
        Error::Api("any".to_string()).user_message()
    );
    assert_ne!(parse_err.user_message(), Error::InvalidApiKey.user_message());
}

//! 解析結果の正規化
//!
//! モデル出力は要求スキーマに従う保証のない外部入力として扱い、
//! UIが信頼できる AnalysisResult に変換してから渡す。
//! - 列挙フィールドのメンバーシップ検査と固定フォールバック
//! - 画質Poor時のグレード・確信度の無条件上書き

use crate::error::Result;
use crate::parser::parse_analysis_response;
use crate::types::{
    AnalysisResult, ConfidenceLevel, ImageQuality, PallorGrade, RawAnalysisResult,
};

/// 生データを検証済みの AnalysisResult へ正規化する
///
/// 1. 3つの列挙フィールドを許容値と照合し、不一致は各フィールドの
///    フォールバック値（Indeterminate / Uncertain / NotAssessable）に置換
/// 2. image_quality が Poor なら pallor_grade と confidence を
///    手順1の結果にかかわらず上書き
///
/// summary / reasoning は自由テキストとしてそのまま通す（空文字も許容）。
/// Grade 0/1 → Low といった相関はモデルへの指示にとどめ、
/// ここでは強制しない。
pub fn normalize(raw: RawAnalysisResult) -> AnalysisResult {
    let mut confidence =
        ConfidenceLevel::parse(&raw.confidence).unwrap_or(ConfidenceLevel::Indeterminate);
    let image_quality = ImageQuality::parse(&raw.image_quality).unwrap_or(ImageQuality::Uncertain);
    let mut pallor_grade =
        PallorGrade::parse(&raw.pallor_grade).unwrap_or(PallorGrade::NotAssessable);

    // 画質不良時はモデルの判定を信頼せず、評価不能として返す
    if image_quality == ImageQuality::Poor {
        confidence = ConfidenceLevel::Indeterminate;
        pallor_grade = PallorGrade::NotAssessable;
    }

    AnalysisResult {
        summary: raw.summary,
        confidence,
        image_quality,
        reasoning: raw.reasoning,
        pallor_grade,
    }
}

/// レスポンステキストから検証済み結果までの一括処理
///
/// パース失敗のみエラー。パースできたレスポンスの列挙値ズレは
/// エラーにせず normalize が黙って補正する。
pub fn validate_response(response: &str) -> Result<AnalysisResult> {
    let raw = parse_analysis_response(response)?;
    Ok(normalize(raw))
}

//! 解析結果の型定義
//!
//! Web(WASM)フロントエンドと共有される型:
//! - ImageQuality / PallorGrade / ConfidenceLevel: 判定の列挙型
//! - RawAnalysisResult: APIレスポンスをパースした直後の生データ（未検証）
//! - AnalysisResult: 正規化済みの最終結果

use serde::{Deserialize, Serialize};

/// 画質の判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageQuality {
    Good,
    Poor,
    Uncertain,
}

impl ImageQuality {
    /// APIが返す文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Good => "Good",
            ImageQuality::Poor => "Poor",
            ImageQuality::Uncertain => "Uncertain",
        }
    }

    /// 文字列から変換（許容値と完全一致のみ）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Good" => Some(ImageQuality::Good),
            "Poor" => Some(ImageQuality::Poor),
            "Uncertain" => Some(ImageQuality::Uncertain),
            _ => None,
        }
    }
}

/// 結膜蒼白の臨床グレード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PallorGrade {
    #[serde(rename = "Grade 0 (Normal)")]
    Grade0,
    #[serde(rename = "Grade 1 (Mild)")]
    Grade1,
    #[serde(rename = "Grade 2 (Moderate)")]
    Grade2,
    #[serde(rename = "Grade 3 (Severe)")]
    Grade3,
    #[serde(rename = "Not Assessable")]
    NotAssessable,
}

impl PallorGrade {
    /// APIが返す文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            PallorGrade::Grade0 => "Grade 0 (Normal)",
            PallorGrade::Grade1 => "Grade 1 (Mild)",
            PallorGrade::Grade2 => "Grade 2 (Moderate)",
            PallorGrade::Grade3 => "Grade 3 (Severe)",
            PallorGrade::NotAssessable => "Not Assessable",
        }
    }

    /// 文字列から変換（許容値と完全一致のみ）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Grade 0 (Normal)" => Some(PallorGrade::Grade0),
            "Grade 1 (Mild)" => Some(PallorGrade::Grade1),
            "Grade 2 (Moderate)" => Some(PallorGrade::Grade2),
            "Grade 3 (Severe)" => Some(PallorGrade::Grade3),
            "Not Assessable" => Some(PallorGrade::NotAssessable),
            _ => None,
        }
    }
}

/// 貧血サインの確信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
    Indeterminate,
}

impl ConfidenceLevel {
    /// APIが返す文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Indeterminate => "Indeterminate",
        }
    }

    /// 文字列から変換（許容値と完全一致のみ）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(ConfidenceLevel::Low),
            "Medium" => Some(ConfidenceLevel::Medium),
            "High" => Some(ConfidenceLevel::High),
            "Indeterminate" => Some(ConfidenceLevel::Indeterminate),
            _ => None,
        }
    }
}

/// APIレスポンスをパースした直後の生データ
///
/// モデルはスキーマを要求されても従う保証がないため、
/// 5フィールドすべてを文字列のまま受ける。欠落フィールドは空文字。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnalysisResult {
    pub summary: String,
    pub confidence: String,
    pub image_quality: String,
    pub reasoning: String,
    pub pallor_grade: String,
}

/// 正規化済みの解析結果
///
/// normalizer::normalize を通した後のみ構築される。
/// image_quality が Poor のとき pallor_grade は NotAssessable、
/// confidence は Indeterminate であることが保証される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub confidence: ConfidenceLevel,
    pub image_quality: ImageQuality,
    pub reasoning: String,
    pub pallor_grade: PallorGrade,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 列挙型テスト
    // =============================================

    #[test]
    fn test_image_quality_parse() {
        assert_eq!(ImageQuality::parse("Good"), Some(ImageQuality::Good));
        assert_eq!(ImageQuality::parse("Poor"), Some(ImageQuality::Poor));
        assert_eq!(ImageQuality::parse("Uncertain"), Some(ImageQuality::Uncertain));
    }

    #[test]
    fn test_image_quality_parse_unknown() {
        assert_eq!(ImageQuality::parse("Excellent"), None);
        assert_eq!(ImageQuality::parse("good"), None); // 大文字小文字は区別
        assert_eq!(ImageQuality::parse(""), None);
    }

    #[test]
    fn test_pallor_grade_parse() {
        assert_eq!(PallorGrade::parse("Grade 0 (Normal)"), Some(PallorGrade::Grade0));
        assert_eq!(PallorGrade::parse("Grade 3 (Severe)"), Some(PallorGrade::Grade3));
        assert_eq!(PallorGrade::parse("Not Assessable"), Some(PallorGrade::NotAssessable));
    }

    #[test]
    fn test_pallor_grade_parse_unknown() {
        // 表記揺れはすべて不一致扱い
        assert_eq!(PallorGrade::parse("Grade 0"), None);
        assert_eq!(PallorGrade::parse("Grade 4"), None);
        assert_eq!(PallorGrade::parse("not assessable"), None);
    }

    #[test]
    fn test_confidence_level_parse() {
        assert_eq!(ConfidenceLevel::parse("Low"), Some(ConfidenceLevel::Low));
        assert_eq!(ConfidenceLevel::parse("High"), Some(ConfidenceLevel::High));
        assert_eq!(ConfidenceLevel::parse("Severe"), None);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for quality in [ImageQuality::Good, ImageQuality::Poor, ImageQuality::Uncertain] {
            assert_eq!(ImageQuality::parse(quality.as_str()), Some(quality));
        }
        for grade in [
            PallorGrade::Grade0,
            PallorGrade::Grade1,
            PallorGrade::Grade2,
            PallorGrade::Grade3,
            PallorGrade::NotAssessable,
        ] {
            assert_eq!(PallorGrade::parse(grade.as_str()), Some(grade));
        }
        for level in [
            ConfidenceLevel::Low,
            ConfidenceLevel::Medium,
            ConfidenceLevel::High,
            ConfidenceLevel::Indeterminate,
        ] {
            assert_eq!(ConfidenceLevel::parse(level.as_str()), Some(level));
        }
    }

    // =============================================
    // RawAnalysisResult テスト
    // =============================================

    #[test]
    fn test_raw_analysis_result_default() {
        let raw = RawAnalysisResult::default();
        assert_eq!(raw.summary, "");
        assert_eq!(raw.confidence, "");
        assert_eq!(raw.image_quality, "");
    }

    #[test]
    fn test_raw_analysis_result_deserialize() {
        let json = r#"{
            "summary": "Mild pallor observed.",
            "confidence": "Low",
            "imageQuality": "Good",
            "reasoning": "Conjunctiva is slightly pale.",
            "pallorGrade": "Grade 1 (Mild)"
        }"#;

        let raw: RawAnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(raw.summary, "Mild pallor observed.");
        assert_eq!(raw.confidence, "Low");
        assert_eq!(raw.image_quality, "Good");
        assert_eq!(raw.pallor_grade, "Grade 1 (Mild)");
    }

    #[test]
    fn test_raw_analysis_result_deserialize_missing_fields() {
        // 欠落フィールドは空文字になる
        let json = r#"{"summary": "only summary"}"#;

        let raw: RawAnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(raw.summary, "only summary");
        assert_eq!(raw.confidence, "");
        assert_eq!(raw.image_quality, "");
        assert_eq!(raw.pallor_grade, "");
    }

    #[test]
    fn test_raw_analysis_result_deserialize_extra_fields() {
        // 余計なフィールドは無視される
        let json = r#"{"summary": "x", "confidence": "High", "modelVersion": "v2"}"#;

        let raw: RawAnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(raw.summary, "x");
        assert_eq!(raw.confidence, "High");
    }

    // =============================================
    // AnalysisResult テスト
    // =============================================

    #[test]
    fn test_analysis_result_serialize() {
        let result = AnalysisResult {
            summary: "Noticeable pallor.".to_string(),
            confidence: ConfidenceLevel::Medium,
            image_quality: ImageQuality::Good,
            reasoning: "Pale pink conjunctiva.".to_string(),
            pallor_grade: PallorGrade::Grade2,
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"confidence\":\"Medium\""));
        assert!(json.contains("\"imageQuality\":\"Good\""));
        assert!(json.contains("\"pallorGrade\":\"Grade 2 (Moderate)\""));
    }

    #[test]
    fn test_analysis_result_roundtrip() {
        let original = AnalysisResult {
            summary: "Severe pallor.".to_string(),
            confidence: ConfidenceLevel::High,
            image_quality: ImageQuality::Good,
            reasoning: "Porcelain-like appearance.".to_string(),
            pallor_grade: PallorGrade::Grade3,
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: AnalysisResult = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original, restored);
    }
}

//! Gemini APIリクエスト組み立て
//!
//! エンコード済み画像と固定プロンプトから generateContent リクエストを
//! 構築する。純粋なデータ組み立てで、ここに失敗モードはない。

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::prompts::ANALYSIS_PROMPT;

/// 使用モデル
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: String,
}

impl GeminiResponse {
    /// 先頭候補のテキストを取り出す
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// 出力スキーマ宣言
///
/// AnalysisResultの5フィールドちょうど、すべてSTRING、すべて必須。
/// モデルがこのスキーマを守る保証はなく、守らない場合は
/// normalizer が補正する。
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise summary of the analysis for signs of anemia like pallor."
            },
            "confidence": {
                "type": "STRING",
                "description": "The confidence level (Low, Medium, High, Indeterminate) for the presence of anemia signs."
            },
            "imageQuality": {
                "type": "STRING",
                "description": "Assessment of the image quality (Good, Poor, Uncertain)."
            },
            "reasoning": {
                "type": "STRING",
                "description": "A step-by-step reasoning for the analysis, confidence level, and image quality assessment."
            },
            "pallorGrade": {
                "type": "STRING",
                "description": "The clinical pallor grade (e.g., 'Grade 0 (Normal)', 'Grade 1 (Mild)', etc.)."
            }
        },
        "required": ["summary", "confidence", "imageQuality", "reasoning", "pallorGrade"]
    })
}

/// 解析リクエストを構築する
///
/// # Arguments
/// * `base64_data` - Base64エンコード済みの画像データ
/// * `mime_type` - 画像のMIMEタイプ（例: "image/jpeg"）
pub fn build_analysis_request(base64_data: &str, mime_type: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
                Part::Text {
                    text: ANALYSIS_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

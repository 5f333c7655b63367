//! Anemia AI Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod prompts;
pub mod request;
pub mod parser;
pub mod normalizer;

pub use types::{AnalysisResult, ConfidenceLevel, ImageQuality, PallorGrade, RawAnalysisResult};
pub use error::{Error, Result};
pub use prompts::ANALYSIS_PROMPT;
pub use request::{build_analysis_request, GeminiRequest, GeminiResponse, GEMINI_MODEL};
pub use parser::{extract_json, parse_analysis_response};
pub use normalizer::{normalize, validate_response};

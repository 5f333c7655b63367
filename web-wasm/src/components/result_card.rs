//! 解析結果カードコンポーネント
//!
//! 確信度に応じた配色で結果を表示し、
//! 画質がGood以外のときは画質警告パネルを併せて出す

use leptos::prelude::*;

use anemia_ai_common::{AnalysisResult, ConfidenceLevel, ImageQuality, PallorGrade};

/// 確信度ごとのカード配色クラス
fn confidence_class(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::Low => "confidence-low",
        ConfidenceLevel::Medium => "confidence-medium",
        ConfidenceLevel::High => "confidence-high",
        ConfidenceLevel::Indeterminate => "confidence-indeterminate",
    }
}

/// 蒼白グレードごとのバッジ配色クラス
fn grade_class(grade: PallorGrade) -> &'static str {
    match grade {
        PallorGrade::Grade0 => "grade-0",
        PallorGrade::Grade1 => "grade-1",
        PallorGrade::Grade2 => "grade-2",
        PallorGrade::Grade3 => "grade-3",
        PallorGrade::NotAssessable => "grade-na",
    }
}

#[component]
pub fn ResultCard(result: AnalysisResult) -> impl IntoView {
    let card_class = format!("result-card {}", confidence_class(result.confidence));
    let badge_class = format!("grade-badge {}", grade_class(result.pallor_grade));
    let show_warning = result.image_quality != ImageQuality::Good;
    let quality_label = result.image_quality.as_str();

    view! {
        <div class=card_class>
            <h3>"AI解析結果"</h3>
            <div class="result-row">
                <span class="result-label">"確信度"</span>
                <span class="result-value">{result.confidence.as_str()}</span>
            </div>
            <div class="result-row">
                <span class="result-label">"蒼白グレード"</span>
                <span class=badge_class>{result.pallor_grade.as_str()}</span>
            </div>
            <div class="result-section">
                <span class="result-label">"所見"</span>
                <p>{result.summary.clone()}</p>
            </div>
            <div class="result-section reasoning">
                <span class="result-label">"AIの判断根拠"</span>
                <p>{result.reasoning.clone()}</p>
            </div>
            <Show when=move || show_warning>
                <div class="quality-warning">
                    <p class="quality-warning-title">{format!("画質: {}", quality_label)}</p>
                    <p>
                        "解析の精度が落ちている可能性があります。"
                        "撮影のコツに沿って撮り直すと、より正確な結果が得られます。"
                    </p>
                </div>
            </Show>
        </div>
    }
}

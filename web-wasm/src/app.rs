//! メインアプリケーションコンポーネント
//!
//! 解析の進行は AnalysisState ひとつで表現する。
//! ローディング中とエラーが同時に立つような不正状態を
//! 型で作れないようにするため、booleanの組では持たない。

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use anemia_ai_common::{AnalysisResult, Error};

use crate::api::gemini;
use crate::components::{
    api_key_prompt::ApiKeyPrompt, disclaimer::Disclaimer, header::Header, loader::Loader,
    quality_guide::QualityGuide, result_card::ResultCard, upload_area::UploadArea,
};

/// デプロイ時にビルド環境変数で埋め込むGemini APIキー
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");
const API_KEY_PLACEHOLDER: &str = "PASTE_YOUR_GEMINI_API_KEY_HERE";

/// 設定済みのAPIキー（未設定・空・プレースホルダはNone）
fn resolved_api_key() -> Option<&'static str> {
    match API_KEY {
        Some(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => Some(key),
        _ => None,
    }
}

/// 解析の進行状態
#[derive(Clone)]
pub enum AnalysisState {
    /// 画像未選択、または結果破棄済み
    Idle,
    /// リクエスト実行中（突入時点で前回の結果は破棄される）
    Requesting,
    /// 検証済みの結果を保持
    Succeeded(AnalysisResult),
    /// ユーザー向けエラーメッセージを保持
    Failed(String),
}

/// 選択中の画像
///
/// data_url は選択が置き換わると一緒に破棄される
#[derive(Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub data_url: String,
}

/// メインアプリケーションコンポーネント
///
/// APIキーが未設定の場合はセットアップ画面のみを表示する
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Show
            when=move || resolved_api_key().is_some()
            fallback=|| view! { <ApiKeyPrompt /> }
        >
            <AnalyzerApp />
        </Show>
    }
}

#[component]
fn AnalyzerApp() -> impl IntoView {
    let api_key = resolved_api_key().unwrap_or_default();

    let (selected, set_selected) = signal(None::<SelectedImage>);
    let (state, set_state) = signal(AnalysisState::Idle);
    let (guide_open, set_guide_open) = signal(false);

    let analyzing = Memo::new(move |_| matches!(state.get(), AnalysisState::Requesting));

    // 画像選択: 前回の結果・エラーを破棄して最初からやり直す
    let on_image_select = move |image: SelectedImage| {
        set_selected.set(Some(image));
        set_state.set(AnalysisState::Idle);
    };

    // 読み込み失敗はエンコード失敗として汎用メッセージに落とす
    let on_encode_error = move |detail: String| {
        let err = Error::Encoding(detail);
        console::error!(format!("画像読み込みエラー: {}", err));
        set_state.set(AnalysisState::Failed(err.user_message().to_string()));
    };

    // 解析開始: Requestingへ入った時点で前回の結果を消す
    let on_analyze = move |_| {
        let Some(image) = selected.get() else {
            return;
        };
        if analyzing.get() {
            return;
        }
        set_state.set(AnalysisState::Requesting);
        spawn_local(async move {
            match gemini::analyze_image(api_key, &image.data_url).await {
                Ok(result) => set_state.set(AnalysisState::Succeeded(result)),
                Err(e) => {
                    // 生のエラーはコンソールのみ。UIには固定文言だけを出す
                    console::error!(format!("解析エラー: {}", e));
                    set_state.set(AnalysisState::Failed(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <Show when=move || guide_open.get()>
                <QualityGuide on_close=move |_| set_guide_open.set(false) />
            </Show>

            <UploadArea
                selected=selected
                analyzing=analyzing
                on_image_select=on_image_select
                on_encode_error=on_encode_error
                on_show_guide=move |_| set_guide_open.set(true)
            />

            <Show when=move || selected.get().is_some()>
                <button
                    class="btn btn-primary analyze-button"
                    disabled=move || analyzing.get()
                    on:click=on_analyze
                >
                    {move || if analyzing.get() { "解析中..." } else { "解析する" }}
                </button>
            </Show>

            <div class="result-area">
                {move || match state.get() {
                    AnalysisState::Idle => ().into_any(),
                    AnalysisState::Requesting => view! { <Loader /> }.into_any(),
                    AnalysisState::Failed(message) => view! {
                        <div class="error-banner" role="alert">
                            <strong>"エラー: "</strong>
                            <span>{message}</span>
                        </div>
                    }
                    .into_any(),
                    AnalysisState::Succeeded(result) => {
                        view! { <ResultCard result=result /> }.into_any()
                    }
                }}
            </div>

            <Disclaimer />
        </div>
    }
}

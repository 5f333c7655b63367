//! APIキー未設定時のセットアップ画面コンポーネント
//!
//! キーはビルド時の環境変数でのみ供給する。
//! この画面が出ている間はアップロードを含む全機能を表示しない。

use leptos::prelude::*;

#[component]
pub fn ApiKeyPrompt() -> impl IntoView {
    view! {
        <div class="api-key-prompt">
            <div class="api-key-panel">
                <h2>"APIキーの設定が必要です"</h2>
                <p>"このアプリを使うには Google Gemini のAPIキーが必要です。"</p>
                <ol class="setup-steps">
                    <li>
                        <a
                            href="https://aistudio.google.com/app/apikey"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Google AI Studio"
                        </a>
                        " でAPIキーを取得します。"
                    </li>
                    <li>
                        "環境変数 "
                        <code>"GEMINI_API_KEY"</code>
                        " にキーを設定してビルドし直します。"
                    </li>
                </ol>
                <p class="text-muted">
                    "このアプリはブラウザ内だけで動作します。"
                    "APIキーがGoogleのAPI以外へ送信されることはありません。"
                </p>
            </div>
        </div>
    }
}

//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"貧血サインAIチェック"</h1>
            <p class="subtitle">"下まぶたの写真から貧血のサインをAIが解析します"</p>
        </header>
    }
}

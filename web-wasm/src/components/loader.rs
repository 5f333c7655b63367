//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-container">
            <div class="spinner" />
            <p class="loader-text">"解析中..."</p>
        </div>
    }
}

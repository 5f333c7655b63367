//! 免責事項コンポーネント

use leptos::prelude::*;

#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <footer class="disclaimer">
            <p>
                "本アプリの解析結果は情報提供のみを目的としたもので、医療上の診断ではありません。"
                "体調に不安がある場合は必ず医療機関を受診してください。"
            </p>
        </footer>
    }
}

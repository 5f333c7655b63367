//! 撮影ガイドモーダルコンポーネント

use leptos::prelude::*;

/// 撮影のコツ（見出し, 説明）
const TIPS: &[(&str, &str)] = &[
    (
        "明るい自然光で撮る",
        "影のある場所や暗い部屋は避けてください。窓際の自然光が最適です。",
    ),
    (
        "ピントを合わせる",
        "画面上でまぶたをタップしてピントを合わせてください。ぼやけた写真は正確に解析できません。",
    ),
    (
        "下まぶたをやさしく引き下げる",
        "指1本で下まぶたをやさしく引き下げ、内側の赤い結膜がはっきり見えるようにしてください。",
    ),
    (
        "カメラに近づく",
        "まぶたの内側が写真の大部分を占めるように撮影してください。",
    ),
    (
        "フラッシュは使わない",
        "フラッシュは反射で本来の色味を飛ばしてしまい、誤った解析につながります。",
    ),
];

#[component]
pub fn QualityGuide<F>(on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let on_backdrop = {
        let on_close = on_close.clone();
        move |_| on_close(())
    };
    let on_button = {
        let on_close = on_close.clone();
        move |_| on_close(())
    };

    view! {
        <div class="modal-backdrop" on:click=on_backdrop>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"正確に解析するための撮影のコツ"</h2>
                </div>
                <ul class="tips-list">
                    {TIPS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <li class="tip">
                                    <h4>{*title}</h4>
                                    <p class="text-muted">{*body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="modal-footer">
                    <button class="btn btn-primary" on:click=on_button>
                        "閉じる"
                    </button>
                </div>
            </div>
        </div>
    }
}

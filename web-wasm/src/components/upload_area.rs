//! アップロードエリアコンポーネント
//!
//! クリック選択とドラッグ&ドロップの両方に対応。
//! 選択ファイルはFileReaderでData URLへ読み込み、
//! プレビューと解析リクエストの両方でそのまま使う。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader};

use crate::app::SelectedImage;

#[component]
pub fn UploadArea<F, E, G>(
    selected: ReadSignal<Option<SelectedImage>>,
    analyzing: Memo<bool>,
    on_image_select: F,
    on_encode_error: E,
    on_show_guide: G,
) -> impl IntoView
where
    F: Fn(SelectedImage) + 'static + Clone + Send,
    E: Fn(String) + 'static + Clone + Send,
    G: Fn(()) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    // 解析実行中は新しい選択を受け付けない
    let is_enabled = move || !analyzing.get();

    let handle_files = {
        let on_image_select = on_image_select.clone();
        let on_encode_error = on_encode_error.clone();
        move |files: FileList| {
            // 1枚のみ対象。複数ドロップ時は先頭を採用
            if let Some(file) = files.get(0) {
                read_file(file, on_image_select.clone(), on_encode_error.clone());
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_files = handle_files.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let Some(target) = ev.target() else {
                    return;
                };
                let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                    return;
                };
                if let Some(files) = input.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let on_guide_click = {
        let on_show_guide = on_show_guide.clone();
        move |_| on_show_guide(())
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=move || selected.get().is_some()
                fallback=|| view! {
                    <div class="upload-icon">"📷"</div>
                    <p>"下まぶたの写真をドラッグ&ドロップ または クリックして選択"</p>
                    <p class="text-muted">"明るい場所で撮影した鮮明な写真が最適です"</p>
                }
            >
                <img
                    class="preview-image"
                    src=move || selected.get().map(|s| s.data_url).unwrap_or_default()
                    alt=move || selected.get().map(|s| s.file_name).unwrap_or_default()
                />
            </Show>
        </div>
        <div class="upload-actions">
            <button class="btn btn-secondary" on:click=on_guide_click>
                "撮影のコツ"
            </button>
        </div>
    }
}

fn read_file<F, E>(file: File, on_loaded: F, on_error: E)
where
    F: Fn(SelectedImage) + 'static,
    E: Fn(String) + 'static,
{
    let file_name = file.name();
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            on_error("FileReaderを作成できません".to_string());
            return;
        }
    };

    let file_name_clone = file_name.clone();
    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(SelectedImage {
                    file_name: file_name_clone.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        on_error(format!("ファイルを読み込めません: {}", file_name));
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let _ = reader.read_as_data_url(&file);
}

//! 圖片上傳區元件
//!
//! 點擊瀏覽與拖拽兩種取得方式，加上預覽與移除。
//! 檔案驗證在狀態機進行，本元件只負責取出事件中的檔案。

use leptos::html;
use leptos::prelude::*;
use media_ai_common::{AnalysisType, AppState, FileOrigin};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<FS, FR>(
    session: ReadSignal<AppState>,
    preview_url: ReadSignal<Option<String>>,
    on_select: FS,
    on_remove: FR,
) -> impl IntoView
where
    FS: Fn(Option<File>, FileOrigin) + 'static + Clone + Send,
    FR: Fn(()) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let has_preview = move || preview_url.get().is_some();

    let on_drop = {
        let on_select = on_select.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // 清單為空的手勢（例如拖拽選取的文字）也交給狀態機回報
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            on_select(file, FileOrigin::Drop);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    // 點擊上傳區轉發給隱藏的檔案輸入
    let on_area_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_input_change = {
        let on_select = on_select.clone();
        move |_| {
            let Some(input) = input_ref.get() else { return };
            let file = input.files().and_then(|files| files.get(0));
            on_select(file, FileOrigin::Picker);
        }
    };

    let on_remove_click = {
        let on_remove = on_remove.clone();
        move |_| {
            // 重設輸入值，同一個檔案才能再次選擇
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
            on_remove(());
        }
    };

    view! {
        <div
            class="input-section"
            class:hidden=move || session.get().analysis_type != AnalysisType::Image
        >
            <div
                class="upload-area"
                class:dragover=move || is_dragover.get()
                class:hidden=has_preview
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_area_click
            >
                <div class="upload-icon">"📷"</div>
                <p>"點擊或拖拽圖片到此處"</p>
                <p class="text-muted">"支援 JPG、PNG 等圖片格式"</p>
            </div>

            <input
                type="file"
                id="image-upload"
                class="hidden"
                accept="image/*"
                node_ref=input_ref
                on:change=on_input_change
            />

            <div class="image-preview" class:hidden=move || !has_preview()>
                <img
                    class="preview-img"
                    src=move || preview_url.get().unwrap_or_default()
                    alt="圖片預覽"
                />
                <p class="image-info">
                    {move || {
                        session
                            .get()
                            .selected_image
                            .map(|image| image.description())
                            .unwrap_or_default()
                    }}
                </p>
                <button class="btn btn-secondary" on:click=on_remove_click>
                    "移除圖片"
                </button>
            </div>
        </div>
    }
}

/// 以 FileReader 把檔案讀成 data URL，完成時回呼
pub fn read_preview<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}

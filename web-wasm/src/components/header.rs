//! 頁首元件

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"短影音與圖片 AI 分析"</h1>
            <p class="subtitle">"貼上影片連結或上傳圖片，由 AI 擷取摘要與重點資訊"</p>
        </header>
    }
}

//! 影片連結輸入元件

use leptos::prelude::*;
use media_ai_common::{AnalysisType, AppState};

#[component]
pub fn VideoInput(
    session: ReadSignal<AppState>,
    video_url: ReadSignal<String>,
    set_video_url: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class="input-section"
            class:hidden=move || session.get().analysis_type != AnalysisType::Video
        >
            <div class="form-group">
                <label for="url-input">"影片連結"</label>
                <input
                    type="text"
                    id="url-input"
                    placeholder="請貼上 YouTube、TikTok 或 Instagram 影片連結..."
                    prop:value=move || video_url.get()
                    on:input=move |ev| {
                        set_video_url.set(event_target_value(&ev));
                    }
                />
            </div>
        </div>
    }
}

//! 分析模式切換元件

use leptos::prelude::*;
use media_ai_common::{AnalysisType, AppState};

#[component]
pub fn ModeSwitcher<F>(session: ReadSignal<AppState>, on_switch: F) -> impl IntoView
where
    F: Fn(AnalysisType) + 'static + Clone + Send,
{
    view! {
        <div class="type-switcher">
            <button
                class="type-btn"
                class:active=move || session.get().analysis_type == AnalysisType::Video
                data-type=AnalysisType::Video.as_str()
                on:click={
                    let on_switch = on_switch.clone();
                    move |_| on_switch(AnalysisType::Video)
                }
            >
                "影片分析"
            </button>
            <button
                class="type-btn"
                class:active=move || session.get().analysis_type == AnalysisType::Image
                data-type=AnalysisType::Image.as_str()
                on:click={
                    let on_switch = on_switch.clone();
                    move |_| on_switch(AnalysisType::Image)
                }
            >
                "圖片分析"
            </button>
        </div>
    }
}

//! 分析結果顯示元件

use leptos::prelude::*;
use media_ai_common::AnalysisResult;

#[component]
pub fn ResultPanel(result: ReadSignal<Option<AnalysisResult>>) -> impl IntoView {
    view! {
        <div class="result-section" class:hidden=move || result.get().is_none()>
            <h2>"分析結果"</h2>

            <div class="result-item summary">
                <h3>"內容摘要"</h3>
                <p>{move || result.get().map(|r| r.summary).unwrap_or_default()}</p>
            </div>

            <div class="result-grid">
                <div class="result-item">
                    <h3>"重要時間"</h3>
                    <p>
                        {move || {
                            result
                                .get()
                                .map(|r| r.important_time_display().to_string())
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="result-item">
                    <h3>"重要地點"</h3>
                    <p>
                        {move || {
                            result
                                .get()
                                .map(|r| r.important_location_display().to_string())
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="result-item">
                    <h3>"文字內容"</h3>
                    <p>
                        {move || {
                            result
                                .get()
                                .map(|r| r.ocr_text_display().to_string())
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="result-item">
                    <h3>"字幕內容"</h3>
                    <p>
                        {move || {
                            result
                                .get()
                                .map(|r| r.caption_display().to_string())
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
            </div>

            // original_path 未經驗證，原樣寫入連結
            <a
                class="original-link"
                target="_blank"
                href=move || result.get().map(|r| r.original_path).unwrap_or_default()
            >
                "查看原始內容"
            </a>
        </div>
    }
}

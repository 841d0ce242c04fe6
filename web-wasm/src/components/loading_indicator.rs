//! 載入指示元件

use leptos::prelude::*;
use media_ai_common::AppState;

#[component]
pub fn LoadingIndicator(session: ReadSignal<AppState>) -> impl IntoView {
    view! {
        <div class="loading" class:hidden=move || !session.get().is_loading()>
            <div class="spinner"></div>
            <p>"分析中，請稍候..."</p>
        </div>
    }
}

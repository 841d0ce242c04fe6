//! 提交控制元件

use leptos::prelude::*;
use media_ai_common::AppState;

#[component]
pub fn SubmitControls<F>(
    session: ReadSignal<AppState>,
    store_in_db: ReadSignal<bool>,
    set_store_in_db: WriteSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="submit-controls">
            <label class="store-option">
                <input
                    type="checkbox"
                    id="store-in-db"
                    prop:checked=move || store_in_db.get()
                    on:change=move |ev| {
                        set_store_in_db.set(event_target_checked(&ev));
                    }
                />
                "將分析結果存入資料庫"
            </label>

            <button
                class="btn btn-primary submit-btn"
                disabled=move || session.get().is_loading()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || session.get().analysis_type.submit_label()}
            </button>
        </div>
    }
}

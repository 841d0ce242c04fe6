//! 主應用程式元件

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    mode_switcher::ModeSwitcher,
    result_panel::ResultPanel,
    submit_controls::SubmitControls,
    upload_area::{read_preview, UploadArea},
    video_input::VideoInput,
};
use media_ai_common::{
    describe_acquired_url, AnalysisResult, AnalysisType, AppState, Error, FileOrigin,
    SelectedImage,
};

/// 主應用程式元件
///
/// 持有整個應用的狀態：狀態機放在單一 signal，
/// 瀏覽器的 File 控制代碼不可跨執行緒，另存於 local signal
#[component]
pub fn App() -> impl IntoView {
    // 應用程式狀態
    let (session, set_session) = signal(AppState::new());
    let (video_url, set_video_url) = signal(String::new());
    let (store_in_db, set_store_in_db) = signal(true);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let selected_file = RwSignal::new_local(None::<File>);

    // 模式切換處理：切換後隱藏前一次結果，需重新提交
    let on_switch = move |target: AnalysisType| {
        set_session.update(|state| state.switch_analysis_type(target));
        set_result.set(None);
    };

    // 圖片選擇處理：驗證通過後保存控制代碼並產生預覽
    let on_select = move |file: Option<File>, origin: FileOrigin| {
        let candidate = file
            .as_ref()
            .map(|file| SelectedImage::new(file.name(), file.size() as u64, file.type_()));

        let mut outcome = Ok(());
        set_session.update(|state| outcome = state.select_image(candidate, origin));

        match outcome {
            Ok(()) => {
                // 通過檢查代表手勢帶有檔案
                if let Some(file) = file {
                    selected_file.set(Some(file.clone()));
                    read_preview(file, move |data_url| set_preview_url.set(Some(data_url)));
                }
            }
            Err(error) => notify(&error.to_string()),
        }
    };

    // 圖片移除處理
    let on_remove = move |_: ()| {
        set_session.update(|state| state.remove_image());
        selected_file.set(None);
        set_preview_url.set(None);
    };

    // 提交處理
    let on_submit = move |_: ()| {
        let url = video_url.get();
        if session.get().analysis_type == AnalysisType::Video {
            log!("{}", describe_acquired_url(&url));
        }

        let store = store_in_db.get();
        let mut outcome = Err(Error::AnalysisInFlight);
        set_session.update(|state| outcome = state.start_analysis(&url, None, store));

        let plan = match outcome {
            Ok(plan) => plan,
            Err(error) => {
                // 進行中防護是無效操作，驗證失敗才通知
                if error.is_validation() {
                    notify(&error.to_string());
                }
                return;
            }
        };

        set_result.set(None);
        log!("{}", plan.describe());

        let file = selected_file.get();
        spawn_local(async move {
            let outcome = api::process::process(&plan, file.as_ref()).await;
            let success = outcome.is_ok();

            match outcome {
                Ok(analysis) => set_result.set(Some(analysis)),
                Err(error) => notify(&format!("錯誤: {}", error)),
            }

            // 無論成敗都回到可互動狀態
            set_session.update(|state| state.finish_analysis(success));
        });
    };

    view! {
        <div class="container">
            <Header />

            <ModeSwitcher session=session on_switch=on_switch />

            <VideoInput session=session video_url=video_url set_video_url=set_video_url />

            <UploadArea
                session=session
                preview_url=preview_url
                on_select=on_select
                on_remove=on_remove
            />

            <SubmitControls
                session=session
                store_in_db=store_in_db
                set_store_in_db=set_store_in_db
                on_submit=on_submit
            />

            <LoadingIndicator session=session />

            <ResultPanel result=result />
        </div>
    }
}

/// 以瀏覽器對話框通知使用者
fn notify(message: &str) {
    let _ = web_sys::window().unwrap().alert_with_message(message);
}

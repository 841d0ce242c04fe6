//! /api/process 呼叫
//!
//! 組裝多部分表單並送出唯一的後端請求。
//! 回應一律以文字讀回，交給 common 的解析器處理，
//! 成功與失敗路徑的解析邏輯因此能在原生環境測試。

use media_ai_common::{
    extract_error_message, parse_process_response, AnalysisResult, Error, RequestPlan, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 後端分析端點
pub const PROCESS_ENDPOINT: &str = "/api/process";

/// 送出分析請求
///
/// # Arguments
/// * `plan` - 已擷取的提交內容
/// * `file` - 圖片模式要附上的檔案本體
///
/// # Returns
/// * `Ok(AnalysisResult)` - 後端回傳的分析結果
/// * `Err` - 後端拒絕、連線失敗或回應格式不符
pub async fn process(plan: &RequestPlan, file: Option<&File>) -> Result<AnalysisResult> {
    let form = build_form_data(plan, file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(PROCESS_ENDPOINT, &opts)
        .map_err(|e| Error::Transport(js_error_text(e)))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::Transport(js_error_text(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| Error::Transport(js_error_text(e)))?;

    let body = read_body_text(&resp).await?;

    if !resp.ok() {
        return Err(Error::Backend(extract_error_message(&body)));
    }

    parse_process_response(&body)
}

/// 依提交內容組裝多部分表單
///
/// 圖片模式先附檔案本體再附文字欄位；瀏覽器自行設定
/// multipart/form-data 的 Content-Type 與邊界
pub fn build_form_data(plan: &RequestPlan, file: Option<&File>) -> Result<FormData> {
    let form = FormData::new().map_err(|e| Error::Transport(js_error_text(e)))?;

    if let RequestPlan::Image { .. } = plan {
        match file {
            Some(file) => {
                form.append_with_blob("file", file)
                    .map_err(|e| Error::Transport(js_error_text(e)))?;
            }
            None => return Err(Error::NoImageSelected),
        }
    }

    for (name, value) in plan.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| Error::Transport(js_error_text(e)))?;
    }

    Ok(form)
}

async fn read_body_text(resp: &Response) -> Result<String> {
    let text_promise = resp.text().map_err(|e| Error::Transport(js_error_text(e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| Error::Transport(js_error_text(e)))?;
    Ok(text_value.as_string().unwrap_or_default())
}

/// JsValue 錯誤轉為可讀文字
fn js_error_text(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

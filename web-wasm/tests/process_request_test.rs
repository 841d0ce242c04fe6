//! 多部分表單組裝測試
//!
//! 驗證 FormData 欄位與後端 /api/process 的介面一致
#![cfg(target_arch = "wasm32")]

use media_ai_common::{RequestPlan, VideoSource};
use media_ai_wasm::api::process::build_form_data;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_file(name: &str) -> web_sys::File {
    let parts = js_sys::Array::of1(&"fake image bytes".into());
    web_sys::File::new_with_str_sequence(&parts, name).expect("建立測試檔案失敗")
}

/// 影片模式：url 與 store_in_db 文字欄位，無檔案
#[wasm_bindgen_test]
fn test_video_form_data() {
    let plan = RequestPlan::Video {
        url: "https://www.youtube.com/watch?v=abc".to_string(),
        source: None,
        store_in_db: true,
    };

    let form = build_form_data(&plan, None).unwrap();
    assert_eq!(
        form.get("url").as_string().as_deref(),
        Some("https://www.youtube.com/watch?v=abc")
    );
    assert_eq!(form.get("store_in_db").as_string().as_deref(), Some("true"));
    assert!(form.get("source").is_null()); // 雙模式版本不送 source
    assert!(form.get("file").is_null());
}

/// 單一模式變體：source 欄位以小寫平台名送出
#[wasm_bindgen_test]
fn test_video_form_data_with_source() {
    let plan = RequestPlan::Video {
        url: "https://www.tiktok.com/@user/video/123".to_string(),
        source: Some(VideoSource::Tiktok),
        store_in_db: false,
    };

    let form = build_form_data(&plan, None).unwrap();
    assert_eq!(form.get("source").as_string().as_deref(), Some("tiktok"));
    assert_eq!(form.get("store_in_db").as_string().as_deref(), Some("false"));
}

/// 圖片模式：檔案本體與 store_in_db
#[wasm_bindgen_test]
fn test_image_form_data() {
    let plan = RequestPlan::Image {
        file_name: "photo.png".to_string(),
        store_in_db: true,
    };

    let file = sample_file("photo.png");
    let form = build_form_data(&plan, Some(&file)).unwrap();

    let attached: web_sys::File = form.get("file").dyn_into().expect("file 欄位不是檔案");
    assert_eq!(attached.name(), "photo.png");
    assert_eq!(form.get("store_in_db").as_string().as_deref(), Some("true"));
    assert!(form.get("url").is_null());
}

/// 圖片模式缺少檔案本體時回報錯誤
#[wasm_bindgen_test]
fn test_image_form_data_without_file() {
    let plan = RequestPlan::Image {
        file_name: "photo.png".to_string(),
        store_in_db: false,
    };

    assert!(build_form_data(&plan, None).is_err());
}

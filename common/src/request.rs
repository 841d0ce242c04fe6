//! 提交請求的組裝
//!
//! RequestPlan 在驗證通過時擷取要送出的內容，
//! 請求發出後不再受模式切換或檔案替換影響

/// 影片來源平台（單一模式變體使用）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoSource {
    Youtube,
    Tiktok,
    Instagram,
}

impl VideoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoSource::Youtube => "youtube",
            VideoSource::Tiktok => "tiktok",
            VideoSource::Instagram => "instagram",
        }
    }
}

/// 已擷取的提交內容
///
/// 文字欄位由 form_fields 列出；圖片的原始位元組
/// 由網頁層在組裝 FormData 時另行附上
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPlan {
    /// 影片連結分析
    Video {
        url: String,
        source: Option<VideoSource>,
        store_in_db: bool,
    },
    /// 上傳圖片分析
    Image { file_name: String, store_in_db: bool },
}

impl RequestPlan {
    /// 多部分表單的文字欄位
    ///
    /// 布林值以 "true"/"false" 文字編碼；雙模式版本不送 source 欄位
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            RequestPlan::Video {
                url,
                source,
                store_in_db,
            } => {
                let mut fields = vec![("url", url.clone())];
                if let Some(source) = source {
                    fields.push(("source", source.as_str().to_string()));
                }
                fields.push(("store_in_db", bool_text(*store_in_db).to_string()));
                fields
            }
            RequestPlan::Image { store_in_db, .. } => {
                vec![("store_in_db", bool_text(*store_in_db).to_string())]
            }
        }
    }

    /// 診斷記錄用的描述文字
    pub fn describe(&self) -> String {
        match self {
            RequestPlan::Video {
                url, store_in_db, ..
            } => {
                format!("準備發送影片分析請求: url='{}', storeInDb={}", url, store_in_db)
            }
            RequestPlan::Image {
                file_name,
                store_in_db,
            } => {
                format!(
                    "準備發送圖片分析請求: file='{}', storeInDb={}",
                    file_name, store_in_db
                )
            }
        }
    }
}

/// 取得輸入框網址時的診斷記錄文字
///
/// 與提交流程一致，記錄前先修剪前後空白
pub fn describe_acquired_url(raw_input: &str) -> String {
    let url = raw_input.trim();
    format!("前端獲取的URL: '{}' (長度: {})", url, url.len())
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

//! 錯誤型別定義

use thiserror::Error;

/// 共用錯誤型別
///
/// 驗證類錯誤（網址為空、未選擇圖片、檔案類型不符）在發出請求前偵測，
/// 不改變提交狀態；協定類錯誤（後端拒絕、連線失敗、JSON 解析失敗）
/// 在回應處理時偵測，提交狀態轉為 Error。
#[derive(Error, Debug)]
pub enum Error {
    #[error("請輸入有效的影片連結")]
    EmptyVideoUrl,

    #[error("請選擇要分析的圖片")]
    NoImageSelected,

    #[error("請選擇有效的圖片檔案")]
    InvalidPickedFile,

    #[error("請拖拽有效的圖片檔案")]
    InvalidDroppedFile,

    #[error("已有分析請求進行中")]
    AnalysisInFlight,

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 是否屬於驗證類錯誤
    ///
    /// 驗證類直接以原文通知使用者；協定類加上「錯誤: 」前綴顯示
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyVideoUrl
                | Error::NoImageSelected
                | Error::InvalidPickedFile
                | Error::InvalidDroppedFile
        )
    }
}

/// Result型別別名
pub type Result<T> = std::result::Result<T, Error>;

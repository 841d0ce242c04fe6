//! 應用程式狀態機
//!
//! 模式切換、圖片選擇與提交生命週期的純狀態轉移，
//! 不依賴 DOM，可在原生環境直接測試:
//! - AnalysisType: 分析模式（影片連結 / 上傳圖片）
//! - SelectedImage: 已選圖片的中繼資料
//! - SubmissionStatus: 提交生命週期
//! - AppState: 整體狀態與各項操作

use crate::error::{Error, Result};
use crate::request::{RequestPlan, VideoSource};

/// 分析模式
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnalysisType {
    #[default]
    Video,
    Image,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Video => "video",
            AnalysisType::Image => "image",
        }
    }

    /// 提交按鈕的顯示文字
    pub fn submit_label(&self) -> &'static str {
        match self {
            AnalysisType::Video => "分析影片",
            AnalysisType::Image => "分析圖片",
        }
    }
}

/// 提交生命週期
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

/// 圖片來源（決定拒絕通知的文案）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileOrigin {
    Picker,
    Drop,
}

impl FileOrigin {
    /// 選擇被拒絕時對應的通知
    fn rejection(self) -> Error {
        match self {
            FileOrigin::Picker => Error::InvalidPickedFile,
            FileOrigin::Drop => Error::InvalidDroppedFile,
        }
    }
}

/// 已選圖片的中繼資料
///
/// 瀏覽器的 File 控制代碼留在網頁層，狀態機只保存可測試的中繼資料
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl SelectedImage {
    pub fn new(file_name: String, byte_size: u64, mime_type: String) -> Self {
        Self {
            file_name,
            byte_size,
            mime_type,
        }
    }

    /// MIME 類別是否屬於圖片
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// 預覽區顯示的檔案資訊，例如 "photo.jpg (2.50 MB)"
    pub fn description(&self) -> String {
        format!("{} ({} MB)", self.file_name, format_size_mb(self.byte_size))
    }
}

/// 位元組數換算為 MB 字串（兩位小數）
pub fn format_size_mb(byte_size: u64) -> String {
    format!("{:.2}", byte_size as f64 / 1024.0 / 1024.0)
}

/// 應用程式狀態
///
/// 單一控制器物件，所有事件處理函式經由它變更狀態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analysis_type: AnalysisType,
    pub status: SubmissionStatus,
    pub selected_image: Option<SelectedImage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切換分析模式
    ///
    /// 純 UI 狀態轉移，不影響提交狀態與已選圖片；
    /// 呼叫端負責同時清除已顯示的結果
    pub fn switch_analysis_type(&mut self, target: AnalysisType) {
        self.analysis_type = target;
    }

    /// 選擇圖片
    ///
    /// 手勢未帶檔案或 MIME 類別不是圖片時依來源回報對應的通知，
    /// 原有選擇維持不變；通過檢查後新選擇直接取代舊選擇
    pub fn select_image(
        &mut self,
        candidate: Option<SelectedImage>,
        origin: FileOrigin,
    ) -> Result<()> {
        match candidate {
            Some(image) if image.is_image() => {
                self.selected_image = Some(image);
                Ok(())
            }
            _ => Err(origin.rejection()),
        }
    }

    /// 移除已選圖片
    pub fn remove_image(&mut self) {
        self.selected_image = None;
    }

    /// 開始分析
    ///
    /// 驗證目前模式的前置條件，通過後擷取提交內容並進入 Loading。
    /// 驗證失敗不改變提交狀態、不發出請求。
    ///
    /// # Arguments
    /// * `video_url` - 影片模式使用的輸入框內容（此處修剪前後空白）
    /// * `source` - 單一模式變體的來源平台，雙模式版本傳入 None
    /// * `store_in_db` - 是否要求後端保存結果
    ///
    /// # Returns
    /// * `Ok(RequestPlan)` - 已擷取的提交內容
    /// * `Err` - 進行中防護或驗證失敗
    pub fn start_analysis(
        &mut self,
        video_url: &str,
        source: Option<VideoSource>,
        store_in_db: bool,
    ) -> Result<RequestPlan> {
        // 同時間最多一個請求
        if self.status == SubmissionStatus::Loading {
            return Err(Error::AnalysisInFlight);
        }

        let plan = match self.analysis_type {
            AnalysisType::Video => {
                let url = video_url.trim();
                if url.is_empty() {
                    return Err(Error::EmptyVideoUrl);
                }
                RequestPlan::Video {
                    url: url.to_string(),
                    source,
                    store_in_db,
                }
            }
            AnalysisType::Image => match &self.selected_image {
                Some(image) => RequestPlan::Image {
                    file_name: image.file_name.clone(),
                    store_in_db,
                },
                None => return Err(Error::NoImageSelected),
            },
        };

        self.status = SubmissionStatus::Loading;
        Ok(plan)
    }

    /// 結束分析
    ///
    /// 成功或失敗都會呼叫，讓 UI 回到可互動狀態
    pub fn finish_analysis(&mut self, success: bool) {
        self.status = if success {
            SubmissionStatus::Done
        } else {
            SubmissionStatus::Error
        };
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }
}

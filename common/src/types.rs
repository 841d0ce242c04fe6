//! 分析結果的型別定義
//!
//! 與後端 /api/process 介面共用的線上格式:
//! - AnalysisResult: 結構化分析結果
//! - ProcessResponse: 成功回應的外層封裝
//! - ErrorBody: 失敗回應的錯誤內容

use serde::{Deserialize, Serialize};

/// 後端分析結果
///
/// 後端以空字串表示缺少的欄位，缺漏的欄位一律以預設值補齊
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// 內容摘要
    pub summary: String,

    /// 重要時間
    pub important_time: String,

    /// 重要地點
    pub important_location: String,

    /// OCR辨識文字
    pub ocr_text: String,

    /// 字幕內容
    pub caption: String,

    /// 原始媒體路徑（連結用）
    pub original_path: String,
}

impl AnalysisResult {
    /// 重要時間的顯示文字（空值顯示占位字串）
    pub fn important_time_display(&self) -> &str {
        if self.important_time.is_empty() {
            "無"
        } else {
            &self.important_time
        }
    }

    /// 重要地點的顯示文字
    pub fn important_location_display(&self) -> &str {
        if self.important_location.is_empty() {
            "無"
        } else {
            &self.important_location
        }
    }

    /// OCR文字的顯示文字
    pub fn ocr_text_display(&self) -> &str {
        if self.ocr_text.is_empty() {
            "無文字內容"
        } else {
            &self.ocr_text
        }
    }

    /// 字幕的顯示文字
    pub fn caption_display(&self) -> &str {
        if self.caption.is_empty() {
            "無字幕內容"
        } else {
            &self.caption
        }
    }
}

/// 成功回應的外層封裝
#[derive(Debug, Deserialize)]
pub struct ProcessResponse {
    pub analysis: AnalysisResult,
}

/// 失敗回應的錯誤內容
///
/// detail 缺漏時由呼叫端改用通用訊息
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert_eq!(result.summary, "");
        assert_eq!(result.original_path, "");
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r#"{
            "summary": "影片描述了城市夜景",
            "important_time": "2024-03-01 21:00",
            "important_location": "台北市信義區",
            "ocr_text": "歡迎光臨",
            "caption": "夜景真美",
            "original_path": "/media/video123.mp4"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("反序列化失敗");
        assert_eq!(result.summary, "影片描述了城市夜景");
        assert_eq!(result.important_time, "2024-03-01 21:00");
        assert_eq!(result.important_location, "台北市信義區");
        assert_eq!(result.ocr_text, "歡迎光臨");
        assert_eq!(result.caption, "夜景真美");
        assert_eq!(result.original_path, "/media/video123.mp4");
    }

    #[test]
    fn test_analysis_result_deserialize_missing_fields() {
        // 只有部分欄位也能反序列化
        let json = r#"{"summary": "摘要", "original_path": "/media/x.mp4"}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("反序列化失敗");
        assert_eq!(result.summary, "摘要");
        assert_eq!(result.important_time, ""); // 預設值
        assert_eq!(result.caption, ""); // 預設值
    }

    // =============================================
    // 占位字串測試
    // =============================================

    #[test]
    fn test_display_placeholders_when_empty() {
        let result = AnalysisResult::default();
        assert_eq!(result.important_time_display(), "無");
        assert_eq!(result.important_location_display(), "無");
        assert_eq!(result.ocr_text_display(), "無文字內容");
        assert_eq!(result.caption_display(), "無字幕內容");
    }

    #[test]
    fn test_display_passthrough_when_present() {
        let result = AnalysisResult {
            important_time: "12:34".to_string(),
            important_location: "高雄港".to_string(),
            ocr_text: "路牌文字".to_string(),
            caption: "字幕一行".to_string(),
            ..Default::default()
        };
        assert_eq!(result.important_time_display(), "12:34");
        assert_eq!(result.important_location_display(), "高雄港");
        assert_eq!(result.ocr_text_display(), "路牌文字");
        assert_eq!(result.caption_display(), "字幕一行");
    }

    // =============================================
    // 回應封裝測試
    // =============================================

    #[test]
    fn test_process_response_deserialize() {
        let json = r#"{
            "success": true,
            "analysis": {"summary": "S", "original_path": "/media/x.mp4"}
        }"#;

        let response: ProcessResponse = serde_json::from_str(json).expect("反序列化失敗");
        assert_eq!(response.analysis.summary, "S");
        assert_eq!(response.analysis.original_path, "/media/x.mp4");
    }

    #[test]
    fn test_process_response_requires_analysis() {
        let json = r#"{"success": true}"#;

        let result = serde_json::from_str::<ProcessResponse>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "無法下載影片"}"#)
            .expect("反序列化失敗");
        assert_eq!(body.detail.as_deref(), Some("無法下載影片"));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"status": 500}"#).expect("反序列化失敗");
        assert!(body.detail.is_none());
    }
}

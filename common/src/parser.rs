//! 後端回應解析
//!
//! /api/process 的回應一律以文字讀入後在此解析，
//! 成功與失敗兩條路徑都能在原生環境測試

use crate::error::Result;
use crate::types::{AnalysisResult, ErrorBody, ProcessResponse};

/// detail 缺漏或無法解析時的通用錯誤訊息
pub const FALLBACK_ERROR_MESSAGE: &str = "處理請求時發生錯誤";

/// 解析成功回應（2xx）的本文
///
/// # Arguments
/// * `body` - 回應本文文字
///
/// # Returns
/// * `Ok(AnalysisResult)` - 解析成功
/// * `Err` - JSON 格式不符或缺少 analysis 欄位
pub fn parse_process_response(body: &str) -> Result<AnalysisResult> {
    let response: ProcessResponse = serde_json::from_str(body)?;
    Ok(response.analysis)
}

/// 擷取失敗回應（非 2xx）本文中的錯誤訊息
///
/// detail 欄位非空時原文回傳，空字串、缺漏或本文無法解析時改用通用訊息
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error_body| error_body.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

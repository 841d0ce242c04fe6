//! Media AI Common Library
//!
//! 網頁(WASM)端共用的狀態機、請求組裝與回應解析

pub mod types;
pub mod state;
pub mod request;
pub mod parser;
pub mod error;

pub use types::AnalysisResult;
pub use state::{AnalysisType, AppState, FileOrigin, SelectedImage, SubmissionStatus};
pub use request::{describe_acquired_url, RequestPlan, VideoSource};
pub use parser::{extract_error_message, parse_process_response, FALLBACK_ERROR_MESSAGE};
pub use error::{Error, Result};

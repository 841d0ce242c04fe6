//! 後端 API 呼叫

pub mod process;

//! UI 元件

pub mod header;
pub mod loading_indicator;
pub mod mode_switcher;
pub mod result_panel;
pub mod submit_controls;
pub mod upload_area;
pub mod video_input;

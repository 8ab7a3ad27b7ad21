//! 펌프 선정 핵심 로직을 라이브러리로 분리하여 CLI 외의 화면 계층에서도 쓰게 한다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod curve;
pub mod loader;
pub mod quantity;
pub mod requirement;
pub mod table;
pub mod ui_cli;
pub mod units;

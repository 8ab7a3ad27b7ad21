//! 유량/양정 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod head;

pub use flow::{convert_flow, FlowUnit};
pub use head::{convert_head, HeadUnit};

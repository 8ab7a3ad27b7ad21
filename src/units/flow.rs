use serde::{Deserialize, Serialize};

/// 유량 단위. 내부 기준은 L/min(LPM)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    LitersPerMinute,
    LitersPerSecond,
    CubicMeterPerHour,
    CubicMeterPerMinute,
    UsGallonPerMinute,
}

impl FlowUnit {
    /// 화면/CLI에 표시하는 단위 표기.
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::LitersPerMinute => "L/min",
            FlowUnit::LitersPerSecond => "L/sec",
            FlowUnit::CubicMeterPerHour => "m³/hr",
            FlowUnit::CubicMeterPerMinute => "m³/min",
            FlowUnit::UsGallonPerMinute => "US gpm",
        }
    }

    pub const ALL: [FlowUnit; 5] = [
        FlowUnit::LitersPerMinute,
        FlowUnit::LitersPerSecond,
        FlowUnit::CubicMeterPerHour,
        FlowUnit::CubicMeterPerMinute,
        FlowUnit::UsGallonPerMinute,
    ];
}

/// 카탈로그 기준 환산 계수 (값 × 계수 = LPM).
fn factor(unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LitersPerMinute => 1.0,
        FlowUnit::LitersPerSecond => 60.0,
        FlowUnit::CubicMeterPerHour => 1000.0 / 60.0,
        FlowUnit::CubicMeterPerMinute => 1000.0,
        FlowUnit::UsGallonPerMinute => 3.785,
    }
}

pub fn to_lpm(value: f64, unit: FlowUnit) -> f64 {
    value * factor(unit)
}

pub fn from_lpm(value_lpm: f64, unit: FlowUnit) -> f64 {
    value_lpm / factor(unit)
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_lpm(to_lpm(value, from), to)
}

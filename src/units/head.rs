use serde::{Deserialize, Serialize};

/// 양정 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadUnit {
    Meter,
    Foot,
}

impl HeadUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            HeadUnit::Meter => "m",
            HeadUnit::Foot => "ft",
        }
    }
}

pub fn to_meter(value: f64, unit: HeadUnit) -> f64 {
    match unit {
        HeadUnit::Meter => value,
        HeadUnit::Foot => value * 0.3048,
    }
}

pub fn from_meter(value_m: f64, unit: HeadUnit) -> f64 {
    match unit {
        HeadUnit::Meter => value_m,
        HeadUnit::Foot => value_m / 0.3048,
    }
}

/// 양정을 다른 단위로 변환한다.
pub fn convert_head(value: f64, from: HeadUnit, to: HeadUnit) -> f64 {
    from_meter(to_meter(value, from), to)
}

use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::flow::{self, FlowUnit};
use crate::units::head::{self, HeadUnit};
use crate::units::{convert_flow, convert_head};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 유량 단위 문자열을 enum으로 해석한다.
///
/// 카탈로그 화면의 표기(`L/min`, `L/sec`, `m³/hr`, `m³/min`, `US gpm`)와
/// ASCII 축약형(`lpm`, `m3/h`, `gpm` 등)을 모두 허용한다.
pub fn parse_flow_unit(s: &str) -> Option<FlowUnit> {
    match s.trim().to_lowercase().as_str() {
        "l/min" | "lpm" => Some(FlowUnit::LitersPerMinute),
        "l/sec" | "l/s" | "lps" => Some(FlowUnit::LitersPerSecond),
        "m³/hr" | "m3/hr" | "m³/h" | "m3/h" | "cmh" => Some(FlowUnit::CubicMeterPerHour),
        "m³/min" | "m3/min" | "cmm" => Some(FlowUnit::CubicMeterPerMinute),
        "us gpm" | "usgpm" | "gpm" => Some(FlowUnit::UsGallonPerMinute),
        _ => None,
    }
}

/// 양정 단위 문자열을 enum으로 해석한다.
pub fn parse_head_unit(s: &str) -> Option<HeadUnit> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Some(HeadUnit::Meter),
        "ft" | "foot" | "feet" => Some(HeadUnit::Foot),
        _ => None,
    }
}

/// 유량 단위 토큰을 해석하되, 모르는 토큰은 이미 LPM인 것으로 간주한다.
pub fn flow_unit_or_canonical(token: &str) -> FlowUnit {
    parse_flow_unit(token).unwrap_or_else(|| {
        tracing::debug!(unit = token, "unknown flow unit, treating value as L/min");
        FlowUnit::LitersPerMinute
    })
}

/// 양정 단위 토큰을 해석하되, 모르는 토큰은 이미 m인 것으로 간주한다.
pub fn head_unit_or_canonical(token: &str) -> HeadUnit {
    parse_head_unit(token).unwrap_or_else(|| {
        tracing::debug!(unit = token, "unknown head unit, treating value as meters");
        HeadUnit::Meter
    })
}

/// 유량을 LPM으로 환산한다. 알 수 없는 단위는 그대로 통과시킨다.
pub fn to_canonical_flow(value: f64, unit: &str) -> f64 {
    flow::to_lpm(value, flow_unit_or_canonical(unit))
}

/// 양정을 m로 환산한다. 알 수 없는 단위는 그대로 통과시킨다.
pub fn to_canonical_head(value: f64, unit: &str) -> f64 {
    head::to_meter(value, head_unit_or_canonical(unit))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 사용자가 양쪽 단위를 직접 지정하는 변환기 전용이므로 모르는 단위는 오류로 돌려준다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Flow => {
            let from = parse_flow_unit(from_unit_str)
                .ok_or_else(|| ConversionError::UnknownUnit(from_unit_str.to_string()))?;
            let to = parse_flow_unit(to_unit_str)
                .ok_or_else(|| ConversionError::UnknownUnit(to_unit_str.to_string()))?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Head => {
            let from = parse_head_unit(from_unit_str)
                .ok_or_else(|| ConversionError::UnknownUnit(from_unit_str.to_string()))?;
            let to = parse_head_unit(to_unit_str)
                .ok_or_else(|| ConversionError::UnknownUnit(to_unit_str.to_string()))?;
            Ok(convert_head(value, from, to))
        }
    }
}

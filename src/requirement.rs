//! 사용자 입력(층수/수전, 연못 배수, 지하 깊이)으로부터 요구 유량·양정을 산정한다.
//!
//! 자동 산정값은 수동 입력란의 초기값일 뿐이며, 검색에는 항상 수동 입력값이
//! 사용된다.

use serde::{Deserialize, Serialize};

use crate::config::InputDefaults;
use crate::units::flow::{self, FlowUnit};
use crate::units::head::{self, HeadUnit};

/// 수전 1개당 유량 [L/min].
pub const LPM_PER_FAUCET: f64 = 15.0;
/// 층당 양정 [m].
pub const METERS_PER_FLOOR: f64 = 3.5;

/// 연못 배수 산정 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainageInput {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub drain_time_hr: f64,
}

/// 연못 배수 산정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainageResult {
    pub pond_volume_liters: f64,
    pub drain_time_minutes: f64,
    /// 배수 시간이 0 이하이면 0
    pub pond_flow_lpm: f64,
}

impl DrainageInput {
    pub fn compute(&self) -> DrainageResult {
        let pond_volume_liters = self.length_m * self.width_m * self.height_m * 1000.0;
        let drain_time_minutes = self.drain_time_hr * 60.0;
        let pond_flow_lpm = if drain_time_minutes > 0.0 {
            pond_volume_liters / drain_time_minutes
        } else {
            0.0
        };
        DrainageResult {
            pond_volume_liters,
            drain_time_minutes,
            pond_flow_lpm,
        }
    }
}

/// 요구조건 산정에 쓰이는 현장 입력 전체.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteInput {
    pub floors: u32,
    pub faucets: u32,
    pub drainage: DrainageInput,
    pub underground_depth_m: f64,
}

impl SiteInput {
    /// 초기화 기본값 테이블로부터 입력을 만든다.
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            floors: defaults.floors,
            faucets: defaults.faucets,
            drainage: DrainageInput {
                length_m: defaults.length_m,
                width_m: defaults.width_m,
                height_m: defaults.height_m,
                drain_time_hr: defaults.drain_time_hr,
            },
            underground_depth_m: defaults.underground_depth_m,
        }
    }
}

impl Default for SiteInput {
    fn default() -> Self {
        Self::from_defaults(&InputDefaults::default())
    }
}

/// 자동 산정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationMode {
    /// 부스터: 층수·수전 수와 연못 배수 중 큰 값
    Application,
    /// 그 외: 연못 배수 + 지하 깊이
    Default,
}

impl DerivationMode {
    pub fn for_category(category: Option<&str>, booster_category: &str) -> Self {
        match category {
            Some(c) if c == booster_category => DerivationMode::Application,
            _ => DerivationMode::Default,
        }
    }
}

/// 자동 산정된 요구 유량/양정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRequirement {
    pub mode: DerivationMode,
    pub drainage: DrainageResult,
    pub flow_lpm: f64,
    pub tdh_m: f64,
}

/// 카테고리에 따른 방식으로 자동 요구조건을 산정한다.
pub fn derive_auto(mode: DerivationMode, site: &SiteInput) -> AutoRequirement {
    let drainage = site.drainage.compute();
    let pond_height = site.drainage.height_m;
    let (flow_lpm, tdh_m) = match mode {
        DerivationMode::Application => (
            (site.faucets as f64 * LPM_PER_FAUCET).max(drainage.pond_flow_lpm),
            (site.floors as f64 * METERS_PER_FLOOR).max(pond_height),
        ),
        DerivationMode::Default => {
            let tdh = if site.underground_depth_m > 0.0 {
                site.underground_depth_m
            } else {
                pond_height
            };
            (drainage.pond_flow_lpm, tdh)
        }
    };
    AutoRequirement {
        mode,
        drainage,
        flow_lpm,
        tdh_m,
    }
}

/// 부스터 입력값으로부터 역산한 층수/수전 수 (표시 전용).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoosterEstimate {
    pub floors: u32,
    pub faucets: u32,
}

/// 입력된 양정/유량 값으로 층수와 수전 수를 역산한다. 반올림은 짝수 쪽으로 맞춘다.
pub fn estimate_booster(flow_value: f64, head_value: f64) -> BoosterEstimate {
    let floors = if head_value > 0.0 {
        (head_value / METERS_PER_FLOOR).round_ties_even() as u32
    } else {
        0
    };
    let faucets = if flow_value > 0.0 {
        (flow_value / LPM_PER_FAUCET).round_ties_even() as u32
    } else {
        0
    };
    BoosterEstimate { floors, faucets }
}

/// 전원 상(phase). 단상/삼상만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Single,
    Three,
}

impl Phase {
    pub fn from_number(n: f64) -> Option<Self> {
        if n == 1.0 {
            Some(Phase::Single)
        } else if n == 3.0 {
            Some(Phase::Three)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> u8 {
        match self {
            Phase::Single => 1,
            Phase::Three => 3,
        }
    }
}

/// 검색 요구조건. 필터 값이 `None`(또는 0)이면 해당 단계는 건너뛴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub flow_value: f64,
    pub flow_unit: FlowUnit,
    pub head_value: f64,
    pub head_unit: HeadUnit,
    pub particle_size_mm: f64,
    pub category: Option<String>,
    pub frequency_hz: Option<f64>,
    pub phase: Option<Phase>,
}

impl Default for Requirement {
    fn default() -> Self {
        Self {
            flow_value: 0.0,
            flow_unit: FlowUnit::LitersPerMinute,
            head_value: 0.0,
            head_unit: HeadUnit::Meter,
            particle_size_mm: 0.0,
            category: None,
            frequency_hz: None,
            phase: None,
        }
    }
}

/// 기준 단위(LPM, m)로 환산된 요구 운전점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalTarget {
    pub flow_lpm: f64,
    pub head_m: f64,
}

impl Requirement {
    /// 자동 산정값으로 수동 입력란을 채운 요구조건 (단위는 L/min, m).
    ///
    /// 자동 산정값이 0이면 초기화 기본값 테이블의 유량/양정으로 채운다.
    pub fn seeded_with_defaults(auto: &AutoRequirement, defaults: &InputDefaults) -> Self {
        let pick = |auto_value: f64, fallback: f64| {
            if auto_value > 0.0 {
                auto_value
            } else {
                fallback
            }
        };
        Self {
            flow_value: pick(auto.flow_lpm, defaults.flow_value),
            head_value: pick(auto.tdh_m, defaults.head_value),
            ..Self::default()
        }
    }

    pub fn canonical(&self) -> CanonicalTarget {
        CanonicalTarget {
            flow_lpm: flow::to_lpm(self.flow_value, self.flow_unit),
            head_m: head::to_meter(self.head_value, self.head_unit),
        }
    }
}

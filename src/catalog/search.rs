use crate::catalog::{Catalog, PumpRecord};
use crate::requirement::{CanonicalTarget, Requirement};

/// 표시 비율 허용 범위 [%].
pub const MIN_PERCENT: u8 = 5;
pub const MAX_PERCENT: u8 = 100;

/// 요구 운전점과의 거리 점수가 붙은 펌프.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub pump: &'a PumpRecord,
    pub flow_delta: f64,
    pub head_delta: f64,
    /// |유량 차| + |양정 차|. 단위가 다른 두 값을 가중치 없이 더한다.
    pub match_score: f64,
}

impl<'a> MatchResult<'a> {
    fn score(pump: &'a PumpRecord, target: CanonicalTarget) -> Self {
        let flow_delta = (pump.rated_flow_lpm - target.flow_lpm).abs();
        let head_delta = (pump.rated_head_m - target.head_m).abs();
        Self {
            pump,
            flow_delta,
            head_delta,
            match_score: flow_delta + head_delta,
        }
    }
}

/// 후보 목록을 조건으로 좁히고 단계별 남은 개수를 기록한다.
fn narrow<F>(candidates: &mut Vec<&PumpRecord>, stage: &'static str, keep: F)
where
    F: Fn(&PumpRecord) -> bool,
{
    candidates.retain(|pump| keep(pump));
    tracing::debug!(stage, remaining = candidates.len(), "filter stage applied");
}

/// 요구조건으로 카탈로그를 걸러낸 뒤 점수 오름차순으로 정렬한다.
///
/// 값이 없거나 0인 조건은 해당 단계를 건너뛴다. 동점은 식별자(숫자 id, 없으면
/// 모델명) 순서로 정렬한다. 결과가 비어 있어도 오류가 아니다.
pub fn search<'a>(catalog: &'a Catalog, req: &Requirement) -> Vec<MatchResult<'a>> {
    let target: CanonicalTarget = req.canonical();
    let mut candidates: Vec<&'a PumpRecord> = catalog.records().iter().collect();

    if let Some(freq) = req.frequency_hz.filter(|f| *f > 0.0) {
        narrow(&mut candidates, "frequency", |p| p.frequency_hz == Some(freq));
    }
    if let Some(phase) = req.phase {
        narrow(&mut candidates, "phase", |p| p.phase == Some(phase));
    }
    if let Some(category) = req.category.as_deref().filter(|c| !c.is_empty()) {
        narrow(&mut candidates, "category", |p| p.category == category);
    }
    if target.flow_lpm > 0.0 {
        narrow(&mut candidates, "flow", |p| p.rated_flow_lpm >= target.flow_lpm);
    }
    if target.head_m > 0.0 {
        narrow(&mut candidates, "head", |p| p.rated_head_m >= target.head_m);
    }
    if req.particle_size_mm > 0.0 && catalog.has_particle_column() {
        narrow(&mut candidates, "particle", |p| {
            p.max_particle_mm.unwrap_or(0.0) >= req.particle_size_mm
        });
    }

    let mut ranked: Vec<MatchResult<'a>> = candidates
        .into_iter()
        .map(|pump| MatchResult::score(pump, target))
        .collect();
    ranked.sort_by(|a, b| {
        a.match_score
            .total_cmp(&b.match_score)
            .then_with(|| a.pump.sort_key.cmp(&b.pump.sort_key))
    });

    tracing::debug!(
        catalog = catalog.len(),
        matched = ranked.len(),
        flow_lpm = target.flow_lpm,
        head_m = target.head_m,
        "search finished"
    );
    ranked
}

/// 상위 `percent`%에 해당하는 표시 개수. 최소 1개를 보장한다.
pub fn count_to_show(ranked_count: usize, percent: u8) -> usize {
    let p = percent.clamp(MIN_PERCENT, MAX_PERCENT) as usize;
    (ranked_count * p / 100).max(1)
}

/// 정렬된 결과를 상위 비율만큼 잘라낸다.
pub fn window<'a>(mut ranked: Vec<MatchResult<'a>>, percent: u8) -> Vec<MatchResult<'a>> {
    let n = count_to_show(ranked.len(), percent);
    ranked.truncate(n);
    ranked
}

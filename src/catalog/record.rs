use std::cmp::Ordering;

use crate::config::CatalogColumns;
use crate::requirement::Phase;
use crate::table::{cell, Cell, Row};

/// 동점 정렬에 쓰이는 식별자 값.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Numeric(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn from_cell(c: &Cell) -> Self {
        if c.is_empty() {
            return SortKey::Missing;
        }
        match c.as_f64() {
            Some(v) => SortKey::Numeric(v),
            None => SortKey::Text(c.as_text().trim().to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Numeric(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Missing => 2,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 숫자 < 문자열 < 결측 순. 결측은 항상 뒤로 간다.
impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// 카테고리 문자열을 정규화한다. 공백을 제거하고 `nan`/`none` 표기는 빈 값으로 본다.
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") || trimmed.eq_ignore_ascii_case("none") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// 카탈로그의 펌프 한 행.
#[derive(Debug, Clone)]
pub struct PumpRecord {
    pub model: String,
    pub sort_key: SortKey,
    /// 정규화된 카테고리. 비어 있으면 미분류.
    pub category: String,
    /// 정격 유량 [LPM]. 숫자가 아니면 0
    pub rated_flow_lpm: f64,
    /// 정격 양정 [m]. 숫자가 아니면 0
    pub rated_head_m: f64,
    pub frequency_hz: Option<f64>,
    pub phase: Option<Phase>,
    /// 통과 가능 최대 이물 직경 [mm]
    pub max_particle_mm: Option<f64>,
    /// 표시용 원본 행 전체
    pub attributes: Row,
}

impl PumpRecord {
    /// 원본 행을 펌프 레코드로 변환한다.
    ///
    /// `model_column`/`sort_column`은 표 단위로 결정된 열 이름이다.
    pub fn from_row(
        row: &Row,
        columns: &CatalogColumns,
        model_column: &str,
        sort_column: Option<&str>,
    ) -> Self {
        let sort_key = sort_column
            .map(|c| SortKey::from_cell(cell(row, c)))
            .unwrap_or(SortKey::Missing);
        PumpRecord {
            model: cell(row, model_column).as_text().trim().to_string(),
            sort_key,
            category: normalize_category(&cell(row, &columns.category).as_text()),
            rated_flow_lpm: cell(row, &columns.rated_flow).as_f64_or_zero(),
            rated_head_m: cell(row, &columns.rated_head).as_f64_or_zero(),
            frequency_hz: cell(row, &columns.frequency).as_f64(),
            phase: cell(row, &columns.phase).as_f64().and_then(Phase::from_number),
            max_particle_mm: cell(row, &columns.particle).as_f64(),
            attributes: row.clone(),
        }
    }

    /// 표시용 속성 값.
    pub fn attribute(&self, column: &str) -> &Cell {
        cell(&self.attributes, column)
    }
}

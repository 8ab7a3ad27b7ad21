//! 펌프 카탈로그 스냅샷과 검색 엔진.
//!
//! 카탈로그는 한 번 적재된 뒤 변경되지 않는다. 다시 불러올 때는 스냅샷 전체를
//! 교체한다.

pub mod record;
pub mod search;

pub use record::{normalize_category, PumpRecord, SortKey};
pub use search::{count_to_show, search, window, MatchResult};

use thiserror::Error;

use crate::config::CatalogColumns;
use crate::requirement::Phase;
use crate::table::Table;

/// 카탈로그 구성 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 필수 열 누락. 검색 전에 호출자에게 알린다.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// 검색 대상 카탈로그.
#[derive(Debug, Clone)]
pub struct Catalog {
    columns: Vec<String>,
    records: Vec<PumpRecord>,
    has_particle_column: bool,
}

impl Catalog {
    /// 표를 검증한 뒤 카탈로그로 변환한다.
    ///
    /// 모델 식별자 열 하나, 정격 유량 열, 정격 양정 열이 모두 있어야 한다.
    pub fn from_table(table: &Table, columns: &CatalogColumns) -> Result<Self, CatalogError> {
        let mut missing = Vec::new();
        let model_column = table.first_present(&columns.models);
        if model_column.is_none() {
            missing.push(columns.models.join(" | "));
        }
        for required in [&columns.rated_flow, &columns.rated_head] {
            if !table.has_column(required) {
                missing.push(required.clone());
            }
        }
        let Some(model_column) = model_column.filter(|_| missing.is_empty()) else {
            return Err(CatalogError::MissingColumns(missing));
        };

        let sort_column = table.first_present(&columns.sort_keys);
        let records: Vec<PumpRecord> = table
            .rows()
            .iter()
            .map(|row| PumpRecord::from_row(row, columns, model_column, sort_column))
            .collect();
        tracing::debug!(
            records = records.len(),
            model_column,
            sort_column = sort_column.unwrap_or("-"),
            "catalog snapshot built"
        );
        Ok(Self {
            columns: table.columns().to_vec(),
            records,
            has_particle_column: table.has_column(&columns.particle),
        })
    }

    pub fn records(&self) -> &[PumpRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_particle_column(&self) -> bool {
        self.has_particle_column
    }

    /// 선택 가능한 카테고리 목록 (빈 값 제외, 정렬, 중복 제거).
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .records
            .iter()
            .filter(|r| !r.category.is_empty())
            .map(|r| r.category.clone())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// 선택 가능한 주파수 목록.
    pub fn frequencies(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self.records.iter().filter_map(|r| r.frequency_hz).collect();
        out.sort_by(f64::total_cmp);
        out.dedup();
        out
    }

    /// 선택 가능한 상 목록. 단상/삼상 외의 값은 레코드 단계에서 이미 걸러진다.
    pub fn phases(&self) -> Vec<Phase> {
        let mut out: Vec<Phase> = self.records.iter().filter_map(|r| r.phase).collect();
        out.sort_by_key(Phase::as_number);
        out.dedup();
        out
    }
}

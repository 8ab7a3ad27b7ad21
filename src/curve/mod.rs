//! 성능곡선 데이터셋과 곡선 추출/비교.

pub mod compare;
pub mod extract;

pub use compare::{compare, Comparison, CurveSeries, OperatingPoint};
pub use extract::{extract_curve, CurvePoint, PressurePoint, PumpCurve};

use thiserror::Error;

use crate::config::CurveColumns;
use crate::table::{cell, Row, Table};

/// 곡선 데이터셋 구성 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// 모델별 정격점 열을 담은 곡선 데이터셋 스냅샷.
#[derive(Debug, Clone)]
pub struct CurveDataset {
    table: Table,
    columns: CurveColumns,
}

impl CurveDataset {
    /// 모델 열이 있는지 확인한 뒤 데이터셋으로 감싼다.
    pub fn from_table(table: Table, columns: CurveColumns) -> Result<Self, CurveError> {
        if !table.has_column(&columns.model) {
            return Err(CurveError::MissingColumns(vec![columns.model.clone()]));
        }
        Ok(Self { table, columns })
    }

    pub fn columns(&self) -> &CurveColumns {
        &self.columns
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 모델의 첫 번째 행.
    pub fn row_for(&self, model: &str) -> Option<&Row> {
        let model = model.trim();
        self.table
            .rows()
            .iter()
            .find(|row| cell(row, &self.columns.model).as_text().trim() == model)
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.row_for(model).is_some()
    }

    /// 곡선 데이터가 있는 모델만 입력 순서대로 남긴다.
    pub fn models_with_curves<'a, S: AsRef<str>>(&self, models: &'a [S]) -> Vec<&'a str> {
        models
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| self.has_model(m))
            .collect()
    }
}

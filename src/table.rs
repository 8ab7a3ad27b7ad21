//! 외부 데이터 계층이 넘겨주는 표 형태 스냅샷.
//!
//! 열 순서를 보존한다. 곡선 테이블의 압력 열은 "앞에서부터 3개"만 쓰므로
//! 순서가 의미를 가진다.

use std::collections::HashMap;

/// 표의 셀 하나.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// CSV 원문 문자열을 셀로 만든다. 공백뿐이면 `Empty`.
    ///
    /// 모델명(`1E5` 등)이 숫자로 바뀌지 않도록 원문은 그대로 두고, 숫자 변환은
    /// 읽는 쪽에서 한다.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    /// 숫자로 강제 변환한다. 변환할 수 없으면 `None` (NaN/무한대 포함).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            Cell::Number(_) => None,
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Cell::Empty => None,
        }
    }

    /// 숫자 변환 실패 시 0으로 대체한다. 필터/정렬 비교에 결측값이 섞이지 않게 한다.
    pub fn as_f64_or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    /// 표시/비교용 문자열. 정수 값은 소수점 없이 출력한다.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// 열 이름 → 셀 매핑으로 된 행.
pub type Row = HashMap<String, Cell>;

static EMPTY_CELL: Cell = Cell::Empty;

/// 열 순서를 보존하는 표 스냅샷.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 열 이름과 행 단위 셀 목록으로 표를 만든다. 셀 수가 모자라면 `Empty`로 채운다.
    pub fn from_rows<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<Cell>>) -> Self {
        let mut table = Table::new(columns.into_iter().map(Into::into).collect());
        for cells in rows {
            table.push_cells(cells);
        }
        table
    }

    pub fn push_cells(&mut self, cells: Vec<Cell>) {
        let mut cells = cells.into_iter();
        let row = self
            .columns
            .iter()
            .map(|c| (c.clone(), cells.next().unwrap_or(Cell::Empty)))
            .collect();
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// 주어진 후보 중 표에 존재하는 첫 번째 열 이름.
    pub fn first_present<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|c| self.has_column(c))
            .map(String::as_str)
    }
}

/// 행에서 셀을 꺼낸다. 없는 열은 `Empty`로 본다.
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a Cell {
    row.get(column).unwrap_or(&EMPTY_CELL)
}

//! CSV 파일을 표 스냅샷으로 읽어들인다.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::table::{Cell, Table};

/// 데이터 적재 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// 임의의 reader에서 헤더가 있는 CSV를 읽는다. 행마다 열 수가 달라도 허용한다.
pub fn read_table<R: Read>(reader: R) -> Result<Table, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let mut table = Table::new(columns);
    for record in rdr.records() {
        let record = record?;
        table.push_cells(record.iter().map(Cell::parse).collect());
    }
    Ok(table)
}

/// CSV 파일을 표로 읽는다.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_table(file)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "loaded table"
    );
    Ok(table)
}

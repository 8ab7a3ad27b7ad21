use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::curve::{CurveDataset, CurveError};
use crate::loader::{self, LoadError};
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 데이터 파일 적재 오류
    #[error("데이터 적재 오류: {0}")]
    Load(#[from] LoadError),
    /// 카탈로그 필수 열 누락
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 곡선 데이터 필수 열 누락
    #[error("곡선 데이터 오류: {0}")]
    Curve(#[from] CurveError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 카탈로그에 행이 하나도 없음
    #[error("펌프 데이터가 없습니다. 데이터 파일을 확인하세요.")]
    NoData,
}

/// 설정된 경로(또는 명령행 경로)에서 카탈로그를 적재하고 검증한다.
pub fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog, AppError> {
    let path = cli.catalog.as_ref().unwrap_or(&config.data.catalog_csv);
    let table = loader::load_table(path)?;
    let catalog = Catalog::from_table(&table, &config.catalog_columns)?;
    if catalog.is_empty() {
        return Err(AppError::NoData);
    }
    Ok(catalog)
}

/// 설정된 경로(또는 명령행 경로)에서 곡선 데이터셋을 적재하고 검증한다.
pub fn load_curves(cli: &Cli, config: &Config) -> Result<CurveDataset, AppError> {
    let path = cli.curves.as_ref().unwrap_or(&config.data.curve_csv);
    let table = loader::load_table(path)?;
    Ok(CurveDataset::from_table(table, config.curve_columns.clone())?)
}

/// 명령 하나를 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Command::Search(args) => {
            let catalog = load_catalog(cli, config)?;
            // 곡선 데이터는 결과 표시용 부가 정보라 적재 실패가 검색을 막지 않는다.
            let curves = load_curves(cli, config)
                .inspect_err(|e| tracing::warn!(error = %e, "curve data unavailable"))
                .ok();
            ui_cli::handle_search(args, config, &catalog, curves.as_ref());
        }
        Command::Curve(args) => {
            let curves = load_curves(cli, config)?;
            ui_cli::handle_curve(args, &curves);
        }
        Command::Compare(args) => {
            let curves = load_curves(cli, config)?;
            ui_cli::handle_compare(args, config, &curves);
        }
        Command::Options => {
            let catalog = load_catalog(cli, config)?;
            ui_cli::handle_options(&catalog);
        }
        Command::Convert(args) => ui_cli::handle_convert(args)?,
    }
    Ok(())
}

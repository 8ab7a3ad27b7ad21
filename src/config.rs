use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 데이터 파일 위치.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub catalog_csv: PathBuf,
    pub curve_csv: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            catalog_csv: PathBuf::from("Pump Selection Data.csv"),
            curve_csv: PathBuf::from("pump_curve_data_rows 1.csv"),
        }
    }
}

/// 카탈로그 표의 열 이름 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    /// 동점 정렬에 쓰는 식별자 열. 앞에 있을수록 우선한다.
    pub sort_keys: Vec<String>,
    /// 모델명 열. 표에 있는 첫 번째 열을 사용한다.
    pub models: Vec<String>,
    pub rated_flow: String,
    pub rated_head: String,
    pub category: String,
    pub frequency: String,
    pub phase: String,
    pub particle: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            sort_keys: vec![
                "id".into(),
                "ID".into(),
                "Model".into(),
                "Model No.".into(),
            ],
            models: vec!["Model".into(), "Model No.".into()],
            rated_flow: "Q Rated/LPM".into(),
            rated_head: "Head Rated/M".into(),
            category: "Category".into(),
            frequency: "Frequency (Hz)".into(),
            phase: "Phase".into(),
            particle: "Pass Solid Dia(mm)".into(),
        }
    }
}

/// 성능곡선 표의 열 규칙 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveColumns {
    pub model: String,
    /// 양정 열 이름의 접미사 (예: `10M`).
    pub head_suffix: String,
    /// 접미사는 맞지만 곡선 샘플이 아닌 열.
    pub head_excluded: Vec<String>,
    /// 압력 열 이름에 포함되는 표기 (예: `3Kg/cm²`).
    pub pressure_marker: String,
    pub pressure_limit: usize,
    /// kgf/cm² → m 수두 근사 계수.
    pub pressure_to_head: f64,
}

impl Default for CurveColumns {
    fn default() -> Self {
        Self {
            model: "Model No.".into(),
            head_suffix: "M".into(),
            head_excluded: vec!["Max Head(M)".into()],
            pressure_marker: "Kg/cm²".into(),
            pressure_limit: 3,
            pressure_to_head: 10.0,
        }
    }
}

/// 곡선 비교 차트 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: ["blue", "red", "green", "orange", "purple", "brown", "pink", "gray"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// 입력 초기화 시 사용하는 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub floors: u32,
    pub faucets: u32,
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub drain_time_hr: f64,
    pub underground_depth_m: f64,
    pub particle_size_mm: f64,
    /// 자동 산정 유량이 0일 때 수동 입력란 초기값 [L/min]
    pub flow_value: f64,
    /// 자동 산정 양정이 0일 때 수동 입력란 초기값 [m]
    pub head_value: f64,
    pub show_percent: u8,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            floors: 0,
            faucets: 0,
            length_m: 0.0,
            width_m: 0.0,
            height_m: 0.0,
            drain_time_hr: 0.01,
            underground_depth_m: 0.0,
            particle_size_mm: 0.0,
            flow_value: 0.0,
            head_value: 0.0,
            show_percent: 100,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 층수/수전 기반 산정을 적용하는 카테고리.
    pub booster_category: String,
    pub data: DataPaths,
    pub catalog_columns: CatalogColumns,
    pub curve_columns: CurveColumns,
    pub chart: ChartConfig,
    pub defaults: InputDefaults,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            booster_category: "Booster".into(),
            data: DataPaths::default(),
            catalog_columns: CatalogColumns::default(),
            curve_columns: CurveColumns::default(),
            chart: ChartConfig::default(),
            defaults: InputDefaults::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "created default config");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 로드했던 경로(없으면 config.toml)에 설정을 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        save_config(self, &path)
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::{self, Catalog, MatchResult};
use crate::config::Config;
use crate::conversion;
use crate::curve::{self, CurveDataset, OperatingPoint};
use crate::quantity::QuantityKind;
use crate::requirement::{self, DerivationMode, DrainageInput, Phase, Requirement, SiteInput};

/// 펌프 카탈로그 검색 및 성능곡선 도구.
#[derive(Debug, Parser)]
#[command(name = "pump_selector", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,
    /// 카탈로그 CSV 경로 (설정값보다 우선)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// 곡선 CSV 경로 (설정값보다 우선)
    #[arg(long, global = true)]
    pub curves: Option<PathBuf>,
    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 요구조건에 맞는 펌프를 검색한다
    Search(SearchArgs),
    /// 한 모델의 성능곡선을 출력한다
    Curve(CurveArgs),
    /// 여러 모델의 성능곡선을 비교한다
    Compare(CompareArgs),
    /// 선택 가능한 카테고리/주파수/상 목록
    Options,
    /// 유량/양정 단위 변환
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// 카테고리 (생략 시 전체)
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub frequency: Option<f64>,
    /// 1 또는 3
    #[arg(long, value_parser = parse_phase)]
    pub phase: Option<Phase>,
    /// 통과 이물 크기 [mm]
    #[arg(long)]
    pub particle: Option<f64>,
    #[arg(long)]
    pub floors: Option<u32>,
    #[arg(long)]
    pub faucets: Option<u32>,
    /// 연못 길이 [m]
    #[arg(long)]
    pub length: Option<f64>,
    /// 연못 폭 [m]
    #[arg(long)]
    pub width: Option<f64>,
    /// 연못 높이 [m]
    #[arg(long)]
    pub height: Option<f64>,
    /// 배수 시간 [h]
    #[arg(long)]
    pub drain_time: Option<f64>,
    /// 지하 펌프 설치 깊이 [m]
    #[arg(long)]
    pub depth: Option<f64>,
    /// 요구 유량 (생략 시 자동 산정값)
    #[arg(long)]
    pub flow: Option<f64>,
    #[arg(long, default_value = "L/min")]
    pub flow_unit: String,
    /// 요구 양정 (생략 시 자동 산정값)
    #[arg(long)]
    pub head: Option<f64>,
    #[arg(long, default_value = "m")]
    pub head_unit: String,
    /// 상위 표시 비율 [%] (5~100)
    #[arg(long)]
    pub percent: Option<u8>,
}

#[derive(Debug, Args)]
pub struct CurveArgs {
    pub model: String,
    /// 운전점 유량 [LPM]
    #[arg(long)]
    pub flow: Option<f64>,
    /// 운전점 양정 [m]
    #[arg(long)]
    pub head: Option<f64>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(required = true)]
    pub models: Vec<String>,
    #[arg(long)]
    pub flow: Option<f64>,
    #[arg(long)]
    pub head: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// flow 또는 head
    #[arg(value_parser = parse_quantity)]
    pub kind: QuantityKind,
    pub value: f64,
    pub from: String,
    pub to: String,
}

fn parse_phase(s: &str) -> Result<Phase, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .and_then(Phase::from_number)
        .ok_or_else(|| format!("phase must be 1 or 3, got {s}"))
}

fn parse_quantity(s: &str) -> Result<QuantityKind, String> {
    QuantityKind::parse(s).ok_or_else(|| format!("unknown quantity: {s}"))
}

/// 명령행 입력과 기본값 테이블로 현장 입력을 만든다.
pub fn site_input(args: &SearchArgs, cfg: &Config) -> SiteInput {
    let base = SiteInput::from_defaults(&cfg.defaults);
    SiteInput {
        floors: args.floors.unwrap_or(base.floors),
        faucets: args.faucets.unwrap_or(base.faucets),
        drainage: DrainageInput {
            length_m: args.length.unwrap_or(base.drainage.length_m),
            width_m: args.width.unwrap_or(base.drainage.width_m),
            height_m: args.height.unwrap_or(base.drainage.height_m),
            drain_time_hr: args.drain_time.unwrap_or(base.drainage.drain_time_hr),
        },
        underground_depth_m: args.depth.unwrap_or(base.underground_depth_m),
    }
}

/// 검색 메뉴를 처리한다.
pub fn handle_search(
    args: &SearchArgs,
    cfg: &Config,
    catalog: &Catalog,
    curves: Option<&CurveDataset>,
) {
    let category = args
        .category
        .as_deref()
        .map(catalog::normalize_category)
        .filter(|c| !c.is_empty());
    let mode = DerivationMode::for_category(category.as_deref(), &cfg.booster_category);
    let site = site_input(args, cfg);
    let auto = requirement::derive_auto(mode, &site);

    println!("\n-- 요구조건 --");
    if auto.drainage.pond_volume_liters > 0.0 {
        println!("연못 체적: {:.0} L", auto.drainage.pond_volume_liters);
    }
    if auto.drainage.pond_flow_lpm > 0.0 {
        println!("배수 필요 유량: {:.0} L/min", auto.drainage.pond_flow_lpm);
    }
    println!(
        "자동 산정: 유량 {:.1} L/min, 양정 {:.1} m",
        auto.flow_lpm, auto.tdh_m
    );

    let mut req = Requirement::seeded_with_defaults(&auto, &cfg.defaults);
    req.flow_value = args.flow.unwrap_or(req.flow_value);
    req.flow_unit = conversion::flow_unit_or_canonical(&args.flow_unit);
    req.head_value = args.head.unwrap_or(req.head_value);
    req.head_unit = conversion::head_unit_or_canonical(&args.head_unit);
    req.particle_size_mm = args.particle.unwrap_or(cfg.defaults.particle_size_mm);
    req.category = category;
    req.frequency_hz = args.frequency;
    req.phase = args.phase;

    if mode == DerivationMode::Application {
        let est = requirement::estimate_booster(req.flow_value, req.head_value);
        println!("추정 층수: {}, 추정 수전 수: {}", est.floors, est.faucets);
    }
    let target = req.canonical();
    println!(
        "검색 기준: 유량 {:.1} L/min, 양정 {:.2} m",
        target.flow_lpm, target.head_m
    );

    let ranked = catalog::search(catalog, &req);
    println!("\n-- 검색 결과 --");
    println!("조건에 맞는 펌프: {}개", ranked.len());
    if ranked.is_empty() {
        println!("조건에 맞는 펌프가 없습니다.");
        return;
    }
    let percent = args.percent.unwrap_or(cfg.defaults.show_percent);
    let shown = catalog::window(ranked, percent);
    println!("상위 {}% 표시: {}개", percent, shown.len());
    print_matches(&shown);

    if let Some(curves) = curves {
        let charted = curve_models(&shown, curves);
        if charted.is_empty() {
            println!("\n곡선 데이터가 있는 결과 모델이 없습니다.");
        } else {
            println!("\n곡선 조회 가능 모델: {}", charted.join(", "));
        }
    }
}

/// 표시된 결과 중 곡선 데이터가 있는 모델명 (결과 순서 유지).
pub fn curve_models(shown: &[MatchResult<'_>], curves: &CurveDataset) -> Vec<String> {
    let names: Vec<&str> = shown.iter().map(|m| m.pump.model.as_str()).collect();
    curves
        .models_with_curves(&names)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn print_matches(results: &[MatchResult<'_>]) {
    println!(
        "{:<20} {:<14} {:>10} {:>8} {:>6} {:>5} {:>10}",
        "Model", "Category", "Q (LPM)", "H (m)", "Hz", "Phase", "Score"
    );
    for m in results {
        let p = m.pump;
        println!(
            "{:<20} {:<14} {:>10.1} {:>8.1} {:>6} {:>5} {:>10.2}",
            p.model,
            p.category,
            p.rated_flow_lpm,
            p.rated_head_m,
            p.frequency_hz.map(|f| f.to_string()).unwrap_or_default(),
            p.phase.map(|ph| ph.as_number().to_string()).unwrap_or_default(),
            m.match_score
        );
    }
}

/// 단일 모델 곡선 메뉴를 처리한다.
pub fn handle_curve(args: &CurveArgs, curves: &CurveDataset) {
    println!("\n-- 성능곡선: {} --", args.model);
    let Some(pump_curve) = curve::extract_curve(curves, &args.model) else {
        println!("이 모델의 곡선 데이터가 없습니다.");
        return;
    };
    if pump_curve.has_head_curve() {
        println!("{:>10} {:>8}", "Q (LPM)", "H (m)");
        for p in &pump_curve.points {
            println!("{:>10.1} {:>8.1}", p.flow_lpm, p.head_m);
        }
    } else {
        println!("양정 곡선 샘플이 없습니다.");
    }
    for p in &pump_curve.pressure_points {
        println!(
            "압력점 {} Kg/cm²: {:.1} LPM @ {:.1} m",
            p.pressure_kgf_cm2, p.flow_lpm, p.head_m
        );
    }
    let op = OperatingPoint::new(args.flow.unwrap_or(0.0), args.head.unwrap_or(0.0));
    if let Some(op) = op {
        println!("운전점: {:.1} LPM, {:.1} m", op.flow_lpm, op.head_m);
        if let Some(h) = pump_curve.head_at(op.flow_lpm) {
            println!("운전 유량에서 곡선 양정: {:.1} m", h);
        }
    }
}

/// 곡선 비교 메뉴를 처리한다.
pub fn handle_compare(args: &CompareArgs, cfg: &Config, curves: &CurveDataset) {
    let op = OperatingPoint::new(args.flow.unwrap_or(0.0), args.head.unwrap_or(0.0));
    let cmp = curve::compare(curves, &args.models, op, &cfg.chart.palette);
    println!("\n-- 성능곡선 비교 --");
    if cmp.series.is_empty() {
        println!("비교할 곡선이 없습니다.");
    }
    for s in &cmp.series {
        let pts: Vec<String> = s
            .points
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.flow_lpm, p.head_m))
            .collect();
        println!("{} [{}]: {}", s.model, s.color, pts.join(" "));
    }
    if let Some(op) = cmp.operating_point {
        println!("운전점: {:.1} LPM, {:.1} m", op.flow_lpm, op.head_m);
    }
}

/// 선택지 목록을 출력한다.
pub fn handle_options(catalog: &Catalog) {
    println!("\n-- 선택 가능 항목 --");
    println!("카테고리: {}", catalog.categories().join(", "));
    let freqs: Vec<String> = catalog.frequencies().iter().map(|f| f.to_string()).collect();
    println!("주파수(Hz): {}", freqs.join(", "));
    let phases: Vec<String> = catalog
        .phases()
        .iter()
        .map(|p| p.as_number().to_string())
        .collect();
    println!("상: {}", phases.join(", "));
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert(args: &ConvertArgs) -> Result<(), conversion::ConversionError> {
    let result = conversion::convert(args.kind, args.value, &args.from, &args.to)?;
    println!("변환 결과: {result} {}", args.to.trim());
    Ok(())
}

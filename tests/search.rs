//! 카탈로그 필터링/순위 테스트.
use pump_selector::catalog::{self, Catalog, CatalogError};
use pump_selector::config::{CatalogColumns, CurveColumns};
use pump_selector::curve::CurveDataset;
use pump_selector::requirement::{Phase, Requirement};
use pump_selector::table::{Cell, Table};
use pump_selector::ui_cli;
use pump_selector::units::FlowUnit;

const COLUMNS: [&str; 8] = [
    "id",
    "Model",
    "Category",
    "Q Rated/LPM",
    "Head Rated/M",
    "Frequency (Hz)",
    "Phase",
    "Pass Solid Dia(mm)",
];

#[allow(clippy::too_many_arguments)]
fn pump(
    id: f64,
    model: &str,
    category: &str,
    flow: f64,
    head: f64,
    hz: f64,
    phase: f64,
    solid: f64,
) -> Vec<Cell> {
    vec![
        id.into(),
        model.into(),
        Cell::parse(category),
        flow.into(),
        head.into(),
        hz.into(),
        phase.into(),
        solid.into(),
    ]
}

fn sample_catalog() -> Catalog {
    let table = Table::from_rows(
        COLUMNS.to_vec(),
        vec![
            pump(1.0, "SP-100", "Sewage", 120.0, 12.0, 60.0, 1.0, 35.0),
            pump(2.0, "BS-200", "Booster", 80.0, 30.0, 60.0, 3.0, 0.0),
            pump(3.0, "BS-150", "Booster", 60.0, 25.0, 50.0, 1.0, 0.0),
            pump(4.0, "SP-300", " Sewage ", 300.0, 8.0, 50.0, 3.0, 50.0),
            pump(5.0, "XX-001", "nan", 40.0, 5.0, 60.0, 1.0, 10.0),
        ],
    );
    Catalog::from_table(&table, &CatalogColumns::default()).expect("catalog")
}

fn models(results: &[catalog::MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|m| m.pump.model.clone()).collect()
}

fn two_pump_catalog() -> Catalog {
    let table = Table::from_rows(
        vec!["Model", "Q Rated/LPM", "Head Rated/M"],
        vec![
            vec!["A".into(), 50.0.into(), 10.0.into()],
            vec!["B".into(), 80.0.into(), 20.0.into()],
        ],
    );
    Catalog::from_table(&table, &CatalogColumns::default()).expect("catalog")
}

#[test]
fn flow_threshold_excludes_undersized_pump() {
    let catalog = two_pump_catalog();
    let req = Requirement {
        flow_value: 60.0,
        head_value: 15.0,
        ..Requirement::default()
    };
    let res = catalog::search(&catalog, &req);
    assert_eq!(models(&res), vec!["B"]);
    assert!((res[0].match_score - 25.0).abs() < 1e-9);
}

#[test]
fn zero_thresholds_only_apply_categorical_filters() {
    let catalog = sample_catalog();
    let all = catalog::search(&catalog, &Requirement::default());
    assert_eq!(all.len(), catalog.len());

    let req = Requirement {
        frequency_hz: Some(60.0),
        ..Requirement::default()
    };
    assert_eq!(catalog::search(&catalog, &req).len(), 3);

    let req = Requirement {
        phase: Some(Phase::Three),
        ..Requirement::default()
    };
    assert_eq!(models(&catalog::search(&catalog, &req)), vec!["BS-200", "SP-300"]);
}

#[test]
fn category_filter_uses_trimmed_values() {
    let catalog = sample_catalog();
    let req = Requirement {
        category: Some("Sewage".into()),
        ..Requirement::default()
    };
    let res = catalog::search(&catalog, &req);
    assert_eq!(res.len(), 2);
    assert!(res.iter().all(|m| m.pump.category == "Sewage"));
    // 원본 행은 표시용으로 그대로 남는다
    assert_eq!(res[1].pump.attribute("Category").as_text(), " Sewage ");
}

#[test]
fn category_options_skip_blank_and_nan() {
    let catalog = sample_catalog();
    assert_eq!(catalog.categories(), vec!["Booster", "Sewage"]);
    assert_eq!(catalog.frequencies(), vec![50.0, 60.0]);
    assert_eq!(catalog.phases(), vec![Phase::Single, Phase::Three]);
}

#[test]
fn particle_filter_treats_missing_as_zero() {
    let catalog = sample_catalog();
    let req = Requirement {
        particle_size_mm: 30.0,
        ..Requirement::default()
    };
    assert_eq!(models(&catalog::search(&catalog, &req)), vec!["SP-100", "SP-300"]);
}

#[test]
fn particle_filter_skipped_without_column() {
    let catalog = two_pump_catalog();
    let req = Requirement {
        particle_size_mm: 30.0,
        ..Requirement::default()
    };
    assert_eq!(catalog::search(&catalog, &req).len(), 2);
}

#[test]
fn scores_are_non_decreasing() {
    let catalog = sample_catalog();
    let req = Requirement {
        flow_value: 1.0,
        flow_unit: FlowUnit::LitersPerSecond,
        head_value: 6.0,
        ..Requirement::default()
    };
    let res = catalog::search(&catalog, &req);
    assert_eq!(models(&res), vec!["BS-150", "BS-200", "SP-100", "SP-300"]);
    for pair in res.windows(2) {
        assert!(pair[0].match_score <= pair[1].match_score);
    }
}

#[test]
fn ties_break_on_identifier() {
    let table = Table::from_rows(
        vec!["id", "Model", "Q Rated/LPM", "Head Rated/M"],
        vec![
            vec![9.0.into(), "Z".into(), 110.0.into(), 10.0.into()],
            vec![2.0.into(), "Y".into(), 90.0.into(), 10.0.into()],
            vec![5.0.into(), "X".into(), 100.0.into(), 20.0.into()],
        ],
    );
    let catalog = Catalog::from_table(&table, &CatalogColumns::default()).expect("catalog");
    let req = Requirement {
        flow_value: 100.0,
        head_value: 10.0,
        ..Requirement::default()
    };
    let res = catalog::search(
        &catalog,
        &Requirement {
            flow_value: 0.0,
            ..req.clone()
        },
    );
    assert_eq!(models(&res), vec!["Y", "X", "Z"]);
    // Y는 유량 미달, Z와 X는 모두 score 10이므로 id 순
    let res = catalog::search(&catalog, &req);
    assert_eq!(models(&res), vec!["X", "Z"]);
}

#[test]
fn non_numeric_ratings_become_zero() {
    let table = Table::from_rows(
        vec!["Model", "Q Rated/LPM", "Head Rated/M"],
        vec![
            vec!["A".into(), Cell::parse("n/a"), Cell::parse("")],
            vec!["B".into(), Cell::parse(" 75 "), Cell::parse("12")],
        ],
    );
    let catalog = Catalog::from_table(&table, &CatalogColumns::default()).expect("catalog");
    assert_eq!(catalog.records()[0].rated_flow_lpm, 0.0);
    assert_eq!(catalog.records()[0].rated_head_m, 0.0);
    let req = Requirement {
        flow_value: 10.0,
        ..Requirement::default()
    };
    assert_eq!(models(&catalog::search(&catalog, &req)), vec!["B"]);
}

#[test]
fn empty_result_is_not_an_error() {
    let catalog = sample_catalog();
    let req = Requirement {
        flow_value: 10_000.0,
        ..Requirement::default()
    };
    assert!(catalog::search(&catalog, &req).is_empty());
}

#[test]
fn search_is_repeatable() {
    let catalog = sample_catalog();
    let req = Requirement {
        head_value: 5.0,
        ..Requirement::default()
    };
    let a = models(&catalog::search(&catalog, &req));
    let b = models(&catalog::search(&catalog, &req));
    assert_eq!(a, b);
}

#[test]
fn percentage_window_keeps_at_least_one() {
    assert_eq!(catalog::count_to_show(20, 100), 20);
    assert_eq!(catalog::count_to_show(20, 5), 1);
    assert_eq!(catalog::count_to_show(20, 50), 10);
    assert_eq!(catalog::count_to_show(7, 30), 2);
    assert_eq!(catalog::count_to_show(3, 5), 1);
    // 범위 밖 비율은 5~100으로 맞춘다
    assert_eq!(catalog::count_to_show(40, 1), 2);
    assert_eq!(catalog::count_to_show(40, 200), 40);

    let catalog = sample_catalog();
    let ranked = catalog::search(&catalog, &Requirement::default());
    assert_eq!(catalog::window(ranked, 40).len(), 2);
}

#[test]
fn missing_required_columns_are_reported() {
    let table = Table::from_rows(vec!["Category", "Q Rated/LPM"], vec![]);
    let err = Catalog::from_table(&table, &CatalogColumns::default()).unwrap_err();
    let CatalogError::MissingColumns(missing) = err;
    assert_eq!(missing, vec!["Model | Model No.", "Head Rated/M"]);
}

#[test]
fn zero_frequency_means_all_frequencies() {
    let table = Table::from_rows(
        vec!["Model", "Q Rated/LPM", "Head Rated/M", "Frequency (Hz)"],
        vec![
            vec!["A".into(), 50.0.into(), 10.0.into(), 60.0.into()],
            vec!["B".into(), 80.0.into(), 20.0.into(), 50.0.into()],
        ],
    );
    let catalog = Catalog::from_table(&table, &CatalogColumns::default()).expect("catalog");
    let req = Requirement {
        frequency_hz: Some(0.0),
        ..Requirement::default()
    };
    assert_eq!(catalog::search(&catalog, &req).len(), 2);

    let req = Requirement {
        frequency_hz: Some(50.0),
        ..Requirement::default()
    };
    assert_eq!(models(&catalog::search(&catalog, &req)), vec!["B"]);
}

#[test]
fn combined_filters_narrow_in_sequence() {
    let catalog = sample_catalog();
    let mut req = Requirement {
        flow_value: 30.0,
        particle_size_mm: 5.0,
        frequency_hz: Some(60.0),
        phase: Some(Phase::Single),
        ..Requirement::default()
    };
    let res = catalog::search(&catalog, &req);
    assert_eq!(models(&res), vec!["XX-001", "SP-100"]);

    req.particle_size_mm = 20.0;
    let res = catalog::search(&catalog, &req);
    assert_eq!(models(&res), vec!["SP-100"]);
}

#[test]
fn curve_models_follow_result_order() {
    let catalog = sample_catalog();
    let curves = CurveDataset::from_table(
        Table::from_rows(
            vec!["Model No.", "10M"],
            vec![
                vec!["SP-100".into(), 100.0.into()],
                vec!["XX-001".into(), 30.0.into()],
                vec!["ZZ-999".into(), 10.0.into()],
            ],
        ),
        CurveColumns::default(),
    )
    .expect("curve dataset");
    let req = Requirement {
        flow_value: 30.0,
        frequency_hz: Some(60.0),
        phase: Some(Phase::Single),
        ..Requirement::default()
    };
    let shown = catalog::window(catalog::search(&catalog, &req), 100);
    assert_eq!(ui_cli::curve_models(&shown, &curves), vec!["XX-001", "SP-100"]);

    let shown = catalog::window(catalog::search(&catalog, &req), 50);
    assert_eq!(ui_cli::curve_models(&shown, &curves), vec!["XX-001"]);
}

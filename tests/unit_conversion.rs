//! 유량/양정 단위 환산 회귀 테스트.
use pump_selector::conversion::{self, ConversionError};
use pump_selector::quantity::QuantityKind;
use pump_selector::units::flow::{from_lpm, to_lpm};
use pump_selector::units::{FlowUnit, HeadUnit};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn flow_factors_match_catalog_table() {
    assert_close("L/sec", conversion::to_canonical_flow(1.0, "L/sec"), 60.0);
    assert_close("m³/hr", conversion::to_canonical_flow(6.0, "m³/hr"), 100.0);
    assert_close("m³/min", conversion::to_canonical_flow(0.5, "m³/min"), 500.0);
    assert_close("US gpm", conversion::to_canonical_flow(10.0, "US gpm"), 37.85);
    assert_close("L/min", conversion::to_canonical_flow(42.0, "L/min"), 42.0);
}

#[test]
fn head_feet_to_meters() {
    assert_close("ft", conversion::to_canonical_head(10.0, "ft"), 3.048);
    assert_close("m", conversion::to_canonical_head(12.0, "m"), 12.0);
}

#[test]
fn unknown_units_pass_through() {
    assert_close("flow", conversion::to_canonical_flow(123.0, "barrels/day"), 123.0);
    assert_close("head", conversion::to_canonical_head(7.5, "fathom"), 7.5);
}

#[test]
fn lpm_roundtrip_through_every_flow_unit() {
    for unit in FlowUnit::ALL {
        let back = to_lpm(from_lpm(250.0, unit), unit);
        assert_close(unit.symbol(), back, 250.0);
    }
}

#[test]
fn strict_convert_rejects_unknown_unit() {
    let gpm = conversion::convert(QuantityKind::Flow, 37.85, "lpm", "gpm").expect("flow");
    assert_close("gpm", gpm, 10.0);
    let ft = conversion::convert(QuantityKind::Head, 3.048, "m", "ft").expect("head");
    assert_close("ft", ft, 10.0);
    let err = conversion::convert(QuantityKind::Head, 1.0, "m", "furlong").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "furlong"));
}

#[test]
fn unit_tokens_parse_display_symbols() {
    for unit in FlowUnit::ALL {
        assert_eq!(conversion::parse_flow_unit(unit.symbol()), Some(unit));
    }
    assert_eq!(conversion::parse_head_unit("ft"), Some(HeadUnit::Foot));
    assert_eq!(conversion::parse_head_unit(" M "), Some(HeadUnit::Meter));
}

use crate::curve::CurveDataset;
use crate::table::cell;

/// 곡선 위의 한 점 (유량, 양정).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub flow_lpm: f64,
    pub head_m: f64,
}

/// 압력 기준 정격점. 차트에는 `head_m` 높이에 개별 마커로 그린다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressurePoint {
    pub flow_lpm: f64,
    pub pressure_kgf_cm2: f64,
    /// 압력 × 10 으로 근사한 수두 [m]
    pub head_m: f64,
}

/// 한 모델의 성능곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurve {
    pub model: String,
    /// 유량 오름차순
    pub points: Vec<CurvePoint>,
    pub pressure_points: Vec<PressurePoint>,
}

impl PumpCurve {
    /// 그릴 수 있는 양정 곡선이 있는지.
    pub fn has_head_curve(&self) -> bool {
        !self.points.is_empty()
    }

    /// 인접한 두 샘플 사이를 선형 보간한 양정. 샘플 유량 범위 밖이면 `None`.
    ///
    /// 차트 표시용이며 검색/순위에는 사용하지 않는다.
    pub fn head_at(&self, flow_lpm: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if flow_lpm < first.flow_lpm || flow_lpm > last.flow_lpm {
            return None;
        }
        if self.points.len() == 1 {
            return Some(first.head_m);
        }
        for win in self.points.windows(2) {
            let (a, b) = (win[0], win[1]);
            if flow_lpm >= a.flow_lpm && flow_lpm <= b.flow_lpm {
                let span = b.flow_lpm - a.flow_lpm;
                if span == 0.0 {
                    return Some(a.head_m.max(b.head_m));
                }
                let frac = (flow_lpm - a.flow_lpm) / span;
                return Some(a.head_m + frac * (b.head_m - a.head_m));
            }
        }
        None
    }
}

fn parse_magnitude(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 양정 열 이름 (`10M`)에서 양정 값을 읽는다.
pub(crate) fn head_from_column(name: &str, suffix: &str) -> Option<f64> {
    parse_magnitude(&name.replace(suffix, ""))
}

/// 압력 열 이름 (`3Kg/cm²`)에서 압력 값을 읽는다.
pub(crate) fn pressure_from_column(name: &str, marker: &str) -> Option<f64> {
    name.split(marker).next().and_then(parse_magnitude)
}

/// 모델의 곡선 행에서 (유량, 양정) 샘플과 압력 정격점을 추출한다.
///
/// 모델 행이 없으면 `None`. 양수 유량 셀만 샘플로 쓰며, 결과는 유량 오름차순이다.
pub fn extract_curve(dataset: &CurveDataset, model: &str) -> Option<PumpCurve> {
    let Some(row) = dataset.row_for(model) else {
        tracing::warn!(model, "no curve data for model");
        return None;
    };
    let cols = dataset.columns();

    let mut points = Vec::new();
    for name in dataset.table().columns() {
        if !name.ends_with(cols.head_suffix.as_str()) || cols.head_excluded.contains(name) {
            continue;
        }
        let Some(head_m) = head_from_column(name, &cols.head_suffix) else {
            tracing::warn!(column = %name, "cannot read head value from column name");
            continue;
        };
        if let Some(flow_lpm) = cell(row, name).as_f64().filter(|f| *f > 0.0) {
            points.push(CurvePoint { flow_lpm, head_m });
        }
    }
    points.sort_by(|a, b| {
        a.flow_lpm
            .total_cmp(&b.flow_lpm)
            .then(a.head_m.total_cmp(&b.head_m))
    });

    let mut pressure_points = Vec::new();
    let pressure_columns = dataset
        .table()
        .columns()
        .iter()
        .filter(|name| name.contains(cols.pressure_marker.as_str()))
        .take(cols.pressure_limit);
    for name in pressure_columns {
        let Some(pressure) = pressure_from_column(name, &cols.pressure_marker) else {
            tracing::warn!(column = %name, "cannot read pressure value from column name");
            continue;
        };
        if let Some(flow_lpm) = cell(row, name).as_f64().filter(|f| *f > 0.0) {
            pressure_points.push(PressurePoint {
                flow_lpm,
                pressure_kgf_cm2: pressure,
                head_m: pressure * cols.pressure_to_head,
            });
        }
    }

    Some(PumpCurve {
        model: model.trim().to_string(),
        points,
        pressure_points,
    })
}

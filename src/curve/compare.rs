use crate::curve::{extract_curve, CurveDataset, CurvePoint};

/// 사용자 운전점 마커.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub flow_lpm: f64,
    pub head_m: f64,
}

impl OperatingPoint {
    /// 유량과 양정이 모두 양수일 때만 마커를 만든다.
    pub fn new(flow_lpm: f64, head_m: f64) -> Option<Self> {
        (flow_lpm > 0.0 && head_m > 0.0).then_some(Self { flow_lpm, head_m })
    }
}

/// 비교 차트의 모델별 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub model: String,
    pub color: String,
    pub points: Vec<CurvePoint>,
}

/// 여러 모델의 곡선을 합친 비교 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub series: Vec<CurveSeries>,
    pub operating_point: Option<OperatingPoint>,
}

/// 모델 목록의 곡선을 모아 비교 결과를 만든다.
///
/// 색상은 입력 목록의 위치로 팔레트를 순환하며 정한다. 곡선이 없는 모델은
/// 건너뛰지만 그 자리의 색상은 소비된다.
pub fn compare<S: AsRef<str>>(
    dataset: &CurveDataset,
    models: &[S],
    operating_point: Option<OperatingPoint>,
    palette: &[String],
) -> Comparison {
    let series = models
        .iter()
        .enumerate()
        .filter_map(|(i, model)| {
            let curve = extract_curve(dataset, model.as_ref())?;
            if !curve.has_head_curve() {
                return None;
            }
            let color = match palette.len() {
                0 => "black".to_string(),
                n => palette[i % n].clone(),
            };
            Some(CurveSeries {
                model: curve.model,
                color,
                points: curve.points,
            })
        })
        .collect();
    Comparison {
        series,
        operating_point,
    }
}

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Flow,
    Head,
}

impl QuantityKind {
    /// `flow` / `head` 문자열을 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flow" | "q" => Some(QuantityKind::Flow),
            "head" | "tdh" | "h" => Some(QuantityKind::Head),
            _ => None,
        }
    }
}


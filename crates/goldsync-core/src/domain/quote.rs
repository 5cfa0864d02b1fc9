//! 금 시세 도메인 타입 정의.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 정규화된 금 시세 스냅샷
///
/// 외부 시세 API 응답을 디코딩한 결과물로, 저장 계층에 전달되기 전의
/// 표준 형태이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// 금속 종류 (예: "gold")
    pub metal: String,
    /// 온스당 가격
    pub price_ounce: Decimal,
    /// 그램당 가격
    pub price_gram: Decimal,
    /// 변동률 (부호 있는 십진수, 해석하지 않고 그대로 보존)
    pub percentage_change: Decimal,
    /// 거래소 식별자 (예: "LBMA")
    pub exchange: String,
    /// 업스트림 타임스탬프, 십진 숫자 문자열로 정규화됨.
    /// 날짜나 시각으로 재해석하지 않는다.
    pub timestamp: String,
}

impl PriceQuote {
    /// 새 시세 스냅샷 생성
    pub fn new(
        metal: impl Into<String>,
        price_ounce: Decimal,
        price_gram: Decimal,
        percentage_change: Decimal,
        exchange: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            metal: metal.into(),
            price_ounce,
            price_gram,
            percentage_change,
            exchange: exchange.into(),
            timestamp: timestamp.into(),
        }
    }

    /// 상승 여부 (변동률 > 0)
    pub fn is_rising(&self) -> bool {
        self.percentage_change > Decimal::ZERO
    }
}

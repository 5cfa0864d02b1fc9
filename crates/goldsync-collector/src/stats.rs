//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 데몬 모드 수집 작업 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestionStats {
    /// 총 시도 횟수
    pub attempts: usize,
    /// 기록 성공 횟수
    pub recorded: usize,
    /// 건너뛴 횟수 (오늘 시세가 이미 기록됨)
    pub duplicates: usize,
    /// 시세 조회 실패 횟수
    pub fetch_errors: usize,
    /// 저장 실패 횟수
    pub persistence_errors: usize,
    /// 데몬 시작 이후 경과 시간
    #[serde(skip)]
    pub uptime: Duration,
}

impl IngestionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 기록 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            (self.recorded as f64 / self.attempts as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            attempts = self.attempts,
            recorded = self.recorded,
            duplicates = self.duplicates,
            fetch_errors = self.fetch_errors,
            persistence_errors = self.persistence_errors,
            success_rate = format!("{:.1}%", self.success_rate()),
            uptime = format!("{:.1}s", self.uptime.as_secs_f64()),
            "수집 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = IngestionStats::new();
        assert_eq!(stats.success_rate(), 0.0);

        let stats = IngestionStats {
            attempts: 4,
            recorded: 1,
            duplicates: 3,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), 25.0);
    }

    #[test]
    fn test_uptime_not_serialized() {
        let stats = IngestionStats {
            attempts: 2,
            recorded: 1,
            uptime: Duration::from_secs(90),
            ..Default::default()
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("attempts"));
        assert!(!json.contains("uptime"));
    }
}

//! # GoldSync Core
//!
//! 금 시세 수집 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 금 시세 도메인 구조체
//! - 로깅 인프라

pub mod domain;
pub mod logging;

pub use domain::*;
pub use logging::*;

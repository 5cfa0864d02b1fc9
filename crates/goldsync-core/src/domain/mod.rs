//! 도메인 모델.

pub mod quote;

pub use quote::PriceQuote;

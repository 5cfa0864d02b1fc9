//! 금 시세 API HTTP 클라이언트.
//!
//! 외부 금 시세 API에서 원시 응답 본문을 가져옵니다. 응답 해석은
//! [`fetcher`](super::fetcher) 모듈이 담당하며, 이 클라이언트는 전송만
//! 책임집니다.
//!
//! # API 키 관리
//!
//! API 키는 선택 사항이며, 설정된 경우 `x-access-token` 헤더로 전송됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use goldsync_data::provider::gold_api::GoldApiClient;
//!
//! let client = GoldApiClient::new("https://api.example.com/XAU")
//!     .with_api_key("secret");
//! ```

use async_trait::async_trait;

use super::fetcher::{FetchError, QuoteSource};

/// 금 시세 API 클라이언트.
#[derive(Clone)]
pub struct GoldApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoldApiClient {
    /// 새로운 금 시세 API 클라이언트 생성.
    ///
    /// # Arguments
    /// * `endpoint` - 시세 API 전체 URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("HTTP 클라이언트 생성 실패"),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// API 키를 설정합니다.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl QuoteSource for GoldApiClient {
    async fn fetch_raw(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.endpoint, "금 시세 API 요청");

        let mut request = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.header("x-access-token", api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::UpstreamReportedFailure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        Ok(response.text().await?)
    }
}

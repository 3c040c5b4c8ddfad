use crate::catalog::Catalog;
use crate::config::ClientSettings;
use crate::core::Recommender;
use crate::models::{AlgorithmInfo, AlgorithmMode, Recommendation, RecommendRequest, RecommendResponse};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the recommendation service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// Where a client result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeSource {
    Remote,
    Fallback,
}

/// Recommendations as seen by a caller of the remote service
#[derive(Debug, Clone)]
pub struct ClientOutcome {
    pub recommendations: Vec<Recommendation>,
    pub algorithm: AlgorithmInfo,
    pub source: OutcomeSource,
}

/// HTTP client for the recommendation service
///
/// Falls back to a degraded local ranking when the service cannot produce
/// a usable answer, so `recommend` always returns recommendations.
pub struct RecommendationClient {
    base_url: String,
    client: Client,
    fallback: Recommender,
}

impl RecommendationClient {
    pub fn new(base_url: String, timeout_secs: u64, catalog: Arc<Catalog>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            client,
            fallback: Recommender::degraded(catalog),
        })
    }

    /// Build a client from the `client` config section
    pub fn from_settings(settings: &ClientSettings, catalog: Arc<Catalog>) -> Result<Self, ClientError> {
        Self::new(settings.base_url.clone(), settings.timeout_secs, catalog)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service for recommendations
    pub async fn fetch(
        &self,
        request: &RecommendRequest,
        mode: AlgorithmMode,
    ) -> Result<RecommendResponse, ClientError> {
        let url = format!("{}/api/v1/recommend", self.base_url.trim_end_matches('/'));

        tracing::debug!("Requesting recommendations from: {}", url);

        let response = self
            .client
            .post(&url)
            .query(&[("algorithm", mode.as_str())])
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ApiError(format!(
                "Recommendation service returned {}",
                response.status()
            )));
        }

        let body: RecommendResponse = response.json().await?;

        if !body.success {
            return Err(ClientError::ApiError("Recommendation service reported failure".into()));
        }

        Ok(body)
    }

    /// Recommendations from the service, or a degraded local ranking
    pub async fn recommend(&self, request: &RecommendRequest, mode: AlgorithmMode) -> ClientOutcome {
        match self.fetch(request, mode).await {
            Ok(body) => ClientOutcome {
                recommendations: body.recommendations,
                algorithm: body.algorithm,
                source: OutcomeSource::Remote,
            },
            Err(e) => {
                tracing::warn!("Recommendation service unavailable, using local fallback: {}", e);

                let result = self
                    .fallback
                    .recommend(&request.to_profile(), AlgorithmMode::Fallback);

                ClientOutcome {
                    recommendations: result.recommendations,
                    algorithm: result.algorithm,
                    source: OutcomeSource::Fallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessTypePreference, WorkEnvironment};
    use mockito::Matcher;

    fn request() -> RecommendRequest {
        RecommendRequest {
            skills: vec!["sewing".to_string(), "embroidery".to_string()],
            experience: "expert".to_string(),
            location: "urban".to_string(),
            education: String::new(),
            business_type: BusinessTypePreference::Goods,
            work_environment: WorkEnvironment::Unspecified,
        }
    }

    fn client(base_url: String) -> RecommendationClient {
        RecommendationClient::new(base_url, 5, Arc::new(Catalog::builtin())).unwrap()
    }

    fn remote_body() -> String {
        let engine = Recommender::with_default_weights(Arc::new(Catalog::builtin()));
        let result = engine.recommend(&request().to_profile(), AlgorithmMode::Ml);

        serde_json::to_string(&RecommendResponse {
            success: true,
            recommendations: result.recommendations,
            algorithm: result.algorithm,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_remote_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::UrlEncoded("algorithm".into(), "ml".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(remote_body())
            .create_async()
            .await;

        let outcome = client(server.url()).recommend(&request(), AlgorithmMode::Ml).await;

        mock.assert_async().await;
        assert_eq!(outcome.source, OutcomeSource::Remote);
        assert_eq!(outcome.recommendations.len(), 3);
        assert_eq!(outcome.algorithm.accuracy, "85-92%");
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"success":false,"error":"Failed to generate recommendations"}"#)
            .create_async()
            .await;

        let outcome = client(server.url()).recommend(&request(), AlgorithmMode::Rule).await;

        assert_eq!(outcome.source, OutcomeSource::Fallback);
        assert_eq!(outcome.algorithm.model, "Rule-based Fallback");
        assert_eq!(outcome.recommendations[0].id, "tailoring");
    }

    #[tokio::test]
    async fn test_reported_failure_falls_back() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":false,"recommendations":[],"algorithm":{"model":"","features":[],"trainingData":"","accuracy":""}}"#)
            .create_async()
            .await;

        let outcome = client(server.url()).recommend(&request(), AlgorithmMode::Rule).await;
        assert_eq!(outcome.source, OutcomeSource::Fallback);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let outcome = client(server.url()).recommend(&request(), AlgorithmMode::Ml).await;
        assert_eq!(outcome.source, OutcomeSource::Fallback);
        assert_eq!(outcome.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn test_from_settings_targets_configured_service() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(remote_body())
            .create_async()
            .await;

        let settings = ClientSettings {
            base_url: format!("{}/", server.url()),
            timeout_secs: 3,
        };
        let client = RecommendationClient::from_settings(&settings, Arc::new(Catalog::builtin())).unwrap();
        assert_eq!(client.base_url(), settings.base_url);

        let outcome = client.recommend(&request(), AlgorithmMode::Ml).await;

        mock.assert_async().await;
        assert_eq!(outcome.source, OutcomeSource::Remote);
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let outcome = client("http://127.0.0.1:1".to_string())
            .recommend(&request(), AlgorithmMode::Rule)
            .await;

        assert_eq!(outcome.source, OutcomeSource::Fallback);
    }

    #[tokio::test]
    async fn test_fetch_reports_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/recommend")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let err = client(server.url()).fetch(&request(), AlgorithmMode::Rule).await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError(msg) if msg.contains("503")));
    }
}

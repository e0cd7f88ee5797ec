//! # API Client
//!
//! HTTP client for communicating with the Rolodex API server.

use reqwest::Client;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use super::normalize::{normalize_list_payload, NormalizedList};
use super::types::{Campaign, Customer, Page};

/// HTTP client for the Rolodex server API.
///
/// Provides methods to fetch the collections the dashboard renders. The
/// client is cheaply cloneable and can be shared across views. Every
/// list response is run through the payload normalizer, so callers get a
/// uniform [`Page`] no matter which envelope shape the endpoint returns.
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex_client::api::RolodexClient;
///
/// let client = RolodexClient::with_token("http://127.0.0.1:8080", token);
///
/// if client.health().await? {
///     let customers = client.list_customers(Some(1)).await?;
///     println!("{} customers", customers.items.len());
/// }
/// ```
#[derive(Clone)]
pub struct RolodexClient {
    base_url: String,
    auth_token: Option<String>,
    http: Client,
}

impl RolodexClient {
    /// Creates an unauthenticated client for the given server URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to create HTTP client"),
        }
    }

    /// Creates a client that sends the session token with every request.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut client = Self::new(base_url);
        client.auth_token = Some(token.into());
        client
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the server is reachable and healthy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the request fails.
    pub async fn health(&self) -> ApiResult<bool> {
        let res = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(res.status().is_success())
    }

    /// Fetches a collection endpoint and normalizes its payload.
    ///
    /// This is the generic path behind the typed list methods; views use
    /// it directly for collections that have no dedicated type yet.
    ///
    /// # Arguments
    ///
    /// * `path` - Endpoint path, e.g. `/api/customers`
    /// * `page` - Optional 1-based page number forwarded as `?page=N`
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Server answered with a non-success status
    /// * [`ApiError::InvalidResponse`] - Body was not JSON at all
    pub async fn fetch_list(&self, path: &str, page: Option<u32>) -> ApiResult<NormalizedList> {
        let mut request = self.http.get(format!("{}{}", self.base_url, path));

        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let res = request.send().await?;

        if !res.status().is_success() {
            return Err(ApiError::Server {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let payload = res
            .json::<Value>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(normalize_list_payload(payload))
    }

    /// Retrieves a page of customers.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_list`](Self::fetch_list) returns, plus
    /// [`ApiError::InvalidResponse`] when records don't decode as
    /// [`Customer`].
    pub async fn list_customers(&self, page: Option<u32>) -> ApiResult<Page<Customer>> {
        self.fetch_list("/api/customers", page)
            .await?
            .decode()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Retrieves a page of campaigns.
    ///
    /// # Errors
    ///
    /// Everything [`fetch_list`](Self::fetch_list) returns, plus
    /// [`ApiError::InvalidResponse`] when records don't decode as
    /// [`Campaign`].
    pub async fn list_campaigns(&self, page: Option<u32>) -> ApiResult<Page<Campaign>> {
        self.fetch_list("/api/campaigns", page)
            .await?
            .decode()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_health_returns_true_when_server_healthy() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        assert!(client.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_health_returns_false_when_server_unhealthy() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        assert!(!client.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_list_customers_handles_bare_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "name": "Ada" },
                { "id": 2, "name": "Grace" }
            ])))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_customers(None).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination, None);
    }

    #[tokio::test]
    async fn test_list_customers_handles_nested_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "customers": [{ "id": 5, "name": "Linus", "status": "churned" }],
                    "pagination": { "pages": 12 }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_customers(None).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Linus");
        assert_eq!(page.page_count(), Some(12));
    }

    #[tokio::test]
    async fn test_list_campaigns_handles_items_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/campaigns"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": 1, "name": "Spring launch", "status": "active" }],
                "pagination": { "pages": 2 }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_campaigns(None).await.unwrap();

        assert_eq!(page.items[0].status, crate::api::CampaignStatus::Active);
        assert_eq!(page.page_count(), Some(2));
    }

    #[tokio::test]
    async fn test_list_campaigns_handles_entity_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/campaigns"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "campaigns": [{ "id": 4, "name": "Re-engagement", "status": "scheduled" }],
                "pagination": { "pages": 4 }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_campaigns(None).await.unwrap();

        assert_eq!(page.items[0].name, "Re-engagement");
        assert_eq!(page.items[0].status, crate::api::CampaignStatus::Scheduled);
        assert_eq!(page.page_count(), Some(4));
    }

    #[tokio::test]
    async fn test_list_campaigns_handles_nested_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/campaigns"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "campaigns": [{ "id": 9, "name": "Winter sale" }],
                    "pagination": { "pages": 2 }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_campaigns(None).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, crate::api::CampaignStatus::Draft);
        assert_eq!(page.page_count(), Some(2));
    }

    #[tokio::test]
    async fn test_list_customers_handles_double_data_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "data": [{ "id": 21, "name": "Edsger" }],
                    "pagination": { "pages": 5 }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_customers(None).await.unwrap();

        assert_eq!(page.items[0].name, "Edsger");
        assert_eq!(page.page_count(), Some(5));
    }

    #[tokio::test]
    async fn test_unrecognized_envelope_yields_empty_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })),
            )
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_customers(None).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.pagination, None);
    }

    #[tokio::test]
    async fn test_page_parameter_is_forwarded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "customers": [] })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let page = client.list_customers(Some(3)).await.unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/campaigns"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::with_token(mock_server.uri(), "tok-123");
        let page = client.list_campaigns(None).await.unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let err = client.list_customers(None).await.unwrap_err();

        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "unauthorized");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let err = client.list_customers(None).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_mismatched_records_are_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(json!({ "customers": [{ "id": "not-a-number" }] })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let err = client.list_customers(None).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_list_exposes_untyped_collections() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/segments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "kind": "vip" }],
                "pagination": { "pages": 1 }
            })))
            .mount(&mock_server)
            .await;

        let client = RolodexClient::new(mock_server.uri());
        let normalized = client.fetch_list("/api/segments", None).await.unwrap();

        assert_eq!(normalized.list, vec![json!({ "kind": "vip" })]);
        assert_eq!(normalized.pagination.unwrap().pages, Some(1));
    }
}

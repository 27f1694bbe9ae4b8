//! Uniform outbound request path to the PayFlow backend.

use std::sync::Arc;

use payflow_auth::SessionStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Authenticated HTTP client for the PayFlow REST API.
///
/// The session store is re-read on every request, so a login or logout in
/// the same process is picked up by the next call. When a principal with a
/// token is present, `Authorization: Bearer <token>` is attached; otherwise
/// the request goes out unauthenticated and the server treats it as such.
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.load() {
            Some(principal) if !principal.token.is_empty() => req.bearer_auth(principal.token),
            _ => req,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.authorize(self.http.get(self.url(path)));
        Self::decode(Self::send(req).await?).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.authorize(self.http.get(self.url(path)).query(query));
        Self::decode(Self::send(req).await?).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        let req = self.authorize(self.http.get(self.url(path)));
        let resp = Self::send(req).await?;
        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.authorize(self.http.post(self.url(path)).json(body));
        Self::decode(Self::send(req).await?).await
    }

    /// POST where only success or failure matters; the body is discarded.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let req = self.authorize(self.http.post(self.url(path)).json(body));
        Self::send(req).await.map(|_| ())
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.authorize(self.http.put(self.url(path)).json(body));
        Self::decode(Self::send(req).await?).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let req = self.authorize(self.http.delete(self.url(path)));
        Self::send(req).await.map(|_| ())
    }

    async fn send(req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "request rejected by server");
        Err(ApiError::from_status_body(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        resp.json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

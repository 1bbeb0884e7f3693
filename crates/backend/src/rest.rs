use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{AppError, BackendConfig};

use crate::error_convert::{error_from_body, ReqwestErrorExt};

/// Thin wrapper over `reqwest::Client` that knows the backend's base URL and
/// attaches the API key headers.
#[derive(Clone, Debug)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl RestClient {
    pub(crate) fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Start a request with `apikey` and a bearer token. The bearer is the
    /// user's access token when given, otherwise the anon key.
    pub(crate) fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.http.request(method, url);
        if !self.config.anon_key.is_empty() {
            req = req.header("apikey", &self.config.anon_key);
        }
        let bearer = token
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.config.anon_key);
        if !bearer.is_empty() {
            req = req.bearer_auth(bearer);
        }
        req
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, AppError> {
        let resp = send(req).await?;
        resp.json::<T>().await.map_err(|e| e.into_app_error())
    }
}

/// Send a request and turn non-2xx responses into `AppError`.
pub(crate) async fn send(req: RequestBuilder) -> Result<Response, AppError> {
    let resp = req.send().await.map_err(|e| e.into_app_error())?;
    check(resp).await
}

/// Pass 2xx responses through; read the body of anything else into an error.
pub(crate) async fn check(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_body(status.as_u16(), &body))
}

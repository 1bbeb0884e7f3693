use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use shared_types::{AppError, BackendConfig, ContentItem, CONTENT_LIST_COLUMNS};

use crate::config::app_config;
use crate::error_convert::ReqwestErrorExt;
use crate::rest::{self, RestClient};

/// Media type asking the REST layer for exactly one row as a bare object.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

// ── Trait ────────────────────────────────────────────────────────────

/// Query/mutation operations on content records.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    /// All records, newest first, with the joined author name.
    async fn list_content(&self) -> Result<Vec<ContentItem>, AppError>;

    /// One record by id.
    async fn get_content(&self, id: &str) -> Result<ContentItem, AppError>;

    /// Delete one record by id. Fails with `NotFound` when nothing was removed.
    async fn delete_content(&self, id: &str) -> Result<(), AppError>;
}

// ── REST implementation ─────────────────────────────────────────────

/// Content store backed by the hosted REST API.
/// Row-level policies on the backend decide what the token may see or delete.
#[derive(Clone, Debug)]
pub struct RestContentStore {
    rest: RestClient,
    access_token: Option<String>,
}

impl RestContentStore {
    pub fn new(config: BackendConfig, access_token: Option<String>) -> Self {
        Self {
            rest: RestClient::new(config),
            access_token,
        }
    }

    /// Store using the loaded application config.
    pub fn from_app_config(access_token: Option<String>) -> Self {
        Self::new(app_config().backend.clone(), access_token)
    }

    fn table_url(&self) -> String {
        let config = self.rest.config();
        config.rest_url(&config.content_table)
    }

    fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl ContentStore for RestContentStore {
    #[tracing::instrument(skip(self))]
    async fn list_content(&self) -> Result<Vec<ContentItem>, AppError> {
        let req = self
            .rest
            .request(Method::GET, &self.table_url(), self.token())
            .query(&[("select", CONTENT_LIST_COLUMNS), ("order", "created_at.desc")]);

        let items: Vec<ContentItem> = self.rest.send_json(req).await?;
        tracing::debug!(count = items.len(), "Fetched content list");
        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    async fn get_content(&self, id: &str) -> Result<ContentItem, AppError> {
        let filter = format!("eq.{id}");
        let req = self
            .rest
            .request(Method::GET, &self.table_url(), self.token())
            .query(&[("select", CONTENT_LIST_COLUMNS), ("id", filter.as_str())])
            .header(ACCEPT, SINGLE_OBJECT);

        let resp = req.send().await.map_err(|e| e.into_app_error())?;
        // Zero (or several) matching rows is reported as 406 for this media type.
        if resp.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(AppError::not_found(format!("Content {id} not found")));
        }
        rest::check(resp)
            .await?
            .json::<ContentItem>()
            .await
            .map_err(|e| e.into_app_error())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_content(&self, id: &str) -> Result<(), AppError> {
        let filter = format!("eq.{id}");
        // Ask for the deleted rows back: a policy that filters the row out
        // answers 2xx with an empty array instead of an error.
        let req = self
            .rest
            .request(Method::DELETE, &self.table_url(), self.token())
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation");

        let deleted: Vec<serde_json::Value> = self.rest.send_json(req).await?;
        if deleted.is_empty() {
            return Err(AppError::not_found(format!(
                "Content {id} not found or not permitted"
            )));
        }
        tracing::info!(content_id = id, "Content deleted");
        Ok(())
    }
}

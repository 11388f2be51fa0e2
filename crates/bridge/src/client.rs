//! HTTP client behind the admin actions.
//!
//! Each public action sends one request to the REST API and folds the
//! outcome into an [`ActionResult`]. The `try_*` variants keep the typed
//! [`BridgeError`] for callers that want to branch on it.

use contentdesk_core::ordering::Direction;
use contentdesk_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::collection::Collection;
use crate::error::BridgeError;
use crate::result::ActionResult;

/// Client for a single contentdesk API instance.
#[derive(Debug, Clone)]
pub struct ActionClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ActionClient {
    /// * `base_url` - Scheme and authority of the API, e.g. `http://host:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every mutation.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sign in with operator credentials and keep the issued token.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), BridgeError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        let body: Value = Self::parse_response(response).await?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BridgeError::InvalidResponse("Login response has no access_token".to_string())
            })?;
        self.token = Some(token.to_string());
        Ok(())
    }

    pub async fn list(&self, collection: Collection) -> ActionResult<Value> {
        self.try_list(collection).await.into()
    }

    pub async fn create(&self, collection: Collection, fields: &Value) -> ActionResult<Value> {
        self.try_create(collection, fields).await.into()
    }

    /// Update item `id` with `fields`. Any `id` inside `fields` is replaced.
    pub async fn update(
        &self,
        collection: Collection,
        id: DbId,
        fields: &Value,
    ) -> ActionResult<Value> {
        self.try_update(collection, id, fields).await.into()
    }

    pub async fn delete(&self, collection: Collection, id: DbId) -> ActionResult<()> {
        ActionResult::from_unit(self.try_delete(collection, id).await)
    }

    pub async fn move_item(
        &self,
        collection: Collection,
        id: DbId,
        direction: Direction,
    ) -> ActionResult<()> {
        ActionResult::from_unit(self.try_move_item(collection, id, direction).await)
    }

    pub async fn try_list(&self, collection: Collection) -> Result<Value, BridgeError> {
        let response = self
            .client
            .get(self.url(collection.path()))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn try_create(
        &self,
        collection: Collection,
        fields: &Value,
    ) -> Result<Value, BridgeError> {
        let response = self
            .authorized(self.client.post(self.url(collection.path())))
            .json(fields)
            .send()
            .await?;

        let created: Value = Self::parse_response(response).await?;
        tracing::debug!(%collection, id = ?created.get("id"), "Created item");
        Ok(created)
    }

    pub async fn try_update(
        &self,
        collection: Collection,
        id: DbId,
        fields: &Value,
    ) -> Result<Value, BridgeError> {
        let mut body = match fields {
            Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        body.insert("id".to_string(), json!(id));

        let response = self
            .authorized(self.client.put(self.url(collection.path())))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn try_delete(&self, collection: Collection, id: DbId) -> Result<(), BridgeError> {
        let response = self
            .authorized(self.client.delete(self.url(collection.path())))
            .json(&json!({ "id": id }))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        tracing::debug!(%collection, id, "Deleted item");
        Ok(())
    }

    pub async fn try_move_item(
        &self,
        collection: Collection,
        id: DbId,
        direction: Direction,
    ) -> Result<(), BridgeError> {
        if !collection.is_positioned() {
            return Err(BridgeError::NotReorderable { collection });
        }

        let response = self
            .authorized(self.client.patch(self.url(collection.path())))
            .json(&json!({ "id": id, "direction": direction }))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`BridgeError::Api`] carrying the status and raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BridgeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), %body, "API request failed");
            return Err(BridgeError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BridgeError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

//! Reqwest-backed client for the user directory API.
//!
//! This adapter owns transport details only: URL building, JSON encoding,
//! status mapping, and decoding. Every call is one request; nothing is retried
//! or cached.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::model::{ApiError, DeleteConfirmation, NewUser, User, UserPatch};

/// Compiled-in API base address (the reverse proxy in front of the backend).
pub const API_BASE: &str = "http://localhost:8080/api";

/// Operations the view needs from the user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users`.
    async fn get_users(&self) -> Result<Vec<User>, ClientError>;

    /// `POST /users`.
    async fn add_user(&self, user: &NewUser) -> Result<User, ClientError>;

    /// `PUT /users/{id}`.
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError>;

    /// `DELETE /users/{id}`.
    async fn delete_user(&self, id: &str) -> Result<DeleteConfirmation, ClientError>;
}

/// [`UsersApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    base: Url,
}

impl HttpUsersApi {
    /// Client for the compiled-in [`API_BASE`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the constant is unusable.
    pub fn from_default_base() -> Result<Self, ClientError> {
        Self::new(API_BASE)
    }

    /// Client for the API rooted at `base`, e.g. `http://localhost:3000`.
    ///
    /// # Examples
    /// ```
    /// use roster_frontend::HttpUsersApi;
    ///
    /// assert!(HttpUsersApi::new("http://localhost:8080/api").is_ok());
    /// assert!(HttpUsersApi::new("not a url").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when `base` does not parse as
    /// a hierarchical URL.
    pub fn new(base: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base)
    }

    /// Reuse an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when `base` does not parse as
    /// a hierarchical URL.
    pub fn with_client(client: Client, base: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|err| ClientError::invalid_base_url(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::invalid_base_url(format!(
                "{base} cannot carry a path"
            )));
        }
        Ok(Self { client, base })
    }

    /// Base address requests are built from.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn users_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ClientError::invalid_base_url("base URL cannot carry a path"))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        let payload = serde_json::from_slice::<ApiError>(&body).ok();
        debug!(status = status.as_u16(), code = ?payload.as_ref().map(|p| &p.code), "API call rejected");
        return Err(ClientError::status(status.as_u16(), payload));
    }

    serde_json::from_slice(&body).map_err(|err| ClientError::decode(err.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    ClientError::transport(error.to_string())
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn get_users(&self) -> Result<Vec<User>, ClientError> {
        send(self.client.get(self.users_url(None)?)).await
    }

    async fn add_user(&self, user: &NewUser) -> Result<User, ClientError> {
        send(self.client.post(self.users_url(None)?).json(user)).await
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError> {
        send(self.client.put(self.users_url(Some(id))?).json(patch)).await
    }

    async fn delete_user(&self, id: &str) -> Result<DeleteConfirmation, ClientError> {
        send(self.client.delete(self.users_url(Some(id))?)).await
    }
}

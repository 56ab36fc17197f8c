//! # HTTP client for the bookings/users admin API
//!
//! [`HttpApi`] implements [`store::RemoteApi`] over `reqwest`, so the same code
//! runs in the browser (fetch) and on desktop (hyper).
//!
//! Any non-2xx status is an error. Bodies are decoded with `serde_json` through
//! the forgiving wire models in `store::models`; in particular a users body
//! without a `users` array is treated as an empty list.

use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use store::models::UsersPayload;
use store::{Booking, RemoteApi, User};

use crate::error::ApiError;

pub const BOOKINGS_PATH: &str = "api/bookings";
pub const USERS_PATH: &str = "api/users/getall";
pub const DELETE_ALL_BOOKINGS_PATH: &str = "api/deleteall/bookings";

/// reqwest-backed admin API client. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// Create a client rooted at `base_url`, e.g. `https://aluminium-ulwg.onrender.com`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: normalized,
                reason: "not a base URL".to_string(),
            });
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        let endpoint = url.to_string();
        tracing::debug!("{} {}", method, endpoint);

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path).await?;
        let endpoint = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

impl RemoteApi for HttpApi {
    type Error = ApiError;

    async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let bookings: Vec<Booking> = self.get_json(BOOKINGS_PATH).await?;
        tracing::info!("fetched {} bookings", bookings.len());
        Ok(bookings)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let payload: UsersPayload = self.get_json(USERS_PATH).await?;
        let users = payload.into_users();
        tracing::info!("fetched {} users", users.len());
        Ok(users)
    }

    async fn delete_all_bookings(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, DELETE_ALL_BOOKINGS_PATH).await?;
        Ok(())
    }
}

//! The remote the dashboard talks to, chosen once at launch.

use api::{ApiError, HttpApi};
use store::{Booking, DashboardConfig, MemoryApi, MemoryApiError, RemoteApi, User};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error(transparent)]
    Http(#[from] ApiError),
    #[error(transparent)]
    Offline(#[from] MemoryApiError),
}

/// Either the real admin API or an empty in-memory preview.
#[derive(Clone, Debug)]
pub enum Backend {
    Http(HttpApi),
    Offline(MemoryApi),
}

impl Backend {
    /// Connect to the configured base URL. An unusable URL falls back to an
    /// empty offline backend so the dashboard still renders.
    pub fn from_config(config: &DashboardConfig) -> Self {
        match HttpApi::new(&config.api.base_url) {
            Ok(http) => {
                tracing::info!("using admin API at {}", http.base_url());
                Backend::Http(http)
            }
            Err(e) => {
                tracing::error!("{e}; running offline");
                Backend::Offline(MemoryApi::new())
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Backend::Offline(_))
    }
}

impl RemoteApi for Backend {
    type Error = BackendError;

    async fn fetch_bookings(&self) -> Result<Vec<Booking>, BackendError> {
        match self {
            Backend::Http(api) => Ok(api.fetch_bookings().await?),
            Backend::Offline(api) => Ok(api.fetch_bookings().await?),
        }
    }

    async fn fetch_users(&self) -> Result<Vec<User>, BackendError> {
        match self {
            Backend::Http(api) => Ok(api.fetch_users().await?),
            Backend::Offline(api) => Ok(api.fetch_users().await?),
        }
    }

    async fn delete_all_bookings(&self) -> Result<(), BackendError> {
        match self {
            Backend::Http(api) => Ok(api.delete_all_bookings().await?),
            Backend::Offline(api) => Ok(api.delete_all_bookings().await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::RemoteCall;

    #[test]
    fn test_default_config_uses_http() {
        let backend = Backend::from_config(&DashboardConfig::default());
        assert!(!backend.is_offline());
        let Backend::Http(api) = backend else {
            panic!("expected http backend");
        };
        assert_eq!(api.base_url().as_str(), "https://aluminium-ulwg.onrender.com/");
    }

    #[test]
    fn test_bad_base_url_runs_offline() {
        let config = DashboardConfig::default().with_base_url("not a url");
        assert!(Backend::from_config(&config).is_offline());
    }

    #[tokio::test]
    async fn test_offline_backend_delegates() {
        let memory = MemoryApi::new().with_bookings(vec![Booking::default()]);
        let backend = Backend::Offline(memory.clone());

        assert_eq!(backend.fetch_bookings().await.unwrap().len(), 1);
        assert!(backend.fetch_users().await.unwrap().is_empty());
        backend.delete_all_bookings().await.unwrap();
        assert!(backend.fetch_bookings().await.unwrap().is_empty());
        assert_eq!(
            memory.calls(),
            [
                RemoteCall::FetchBookings,
                RemoteCall::FetchUsers,
                RemoteCall::DeleteAllBookings,
                RemoteCall::FetchBookings,
            ]
        );
    }

    #[tokio::test]
    async fn test_errors_keep_their_message() {
        let backend = Backend::Offline(MemoryApi::new().failing());
        let err = backend.fetch_users().await.unwrap_err();
        assert_eq!(err.to_string(), "remote unavailable");
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Booking, User};
use crate::remote::RemoteApi;

#[derive(Debug, thiserror::Error)]
pub enum MemoryApiError {
    #[error("remote unavailable")]
    Unavailable,
}

/// A call received by [`MemoryApi`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteCall {
    FetchBookings,
    FetchUsers,
    DeleteAllBookings,
}

#[derive(Debug, Default)]
struct Inner {
    bookings: Vec<Booking>,
    users: Vec<User>,
    calls: Vec<RemoteCall>,
    failing: bool,
}

/// In-memory RemoteApi for testing and offline preview.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        self.lock().bookings = bookings;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.lock().users = users;
        self
    }

    /// Every call fails with [`MemoryApiError::Unavailable`].
    pub fn failing(self) -> Self {
        self.lock().failing = true;
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: RemoteCall) -> Result<MutexGuard<'_, Inner>, MemoryApiError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        if inner.failing {
            return Err(MemoryApiError::Unavailable);
        }
        Ok(inner)
    }
}

impl RemoteApi for MemoryApi {
    type Error = MemoryApiError;

    async fn fetch_bookings(&self) -> Result<Vec<Booking>, MemoryApiError> {
        Ok(self.record(RemoteCall::FetchBookings)?.bookings.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, MemoryApiError> {
        Ok(self.record(RemoteCall::FetchUsers)?.users.clone())
    }

    async fn delete_all_bookings(&self) -> Result<(), MemoryApiError> {
        self.record(RemoteCall::DeleteAllBookings)?.bookings.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::UserEdit;
    use crate::state::DashboardState;

    fn users() -> Vec<User> {
        ["Ann", "Ben", "Cat"]
            .iter()
            .map(|n| User {
                name: n.to_string(),
                email: format!("{n}@x.com"),
                password: "pw".to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_fetches_are_recorded() {
        let remote = MemoryApi::new().with_users(users());
        assert!(remote.fetch_bookings().await.unwrap().is_empty());
        assert_eq!(remote.fetch_users().await.unwrap().len(), 3);
        assert_eq!(
            remote.calls(),
            vec![RemoteCall::FetchBookings, RemoteCall::FetchUsers]
        );
    }

    #[tokio::test]
    async fn test_failing_remote() {
        let remote = MemoryApi::new().failing();
        assert!(remote.fetch_users().await.is_err());
        assert_eq!(remote.calls(), vec![RemoteCall::FetchUsers]);
    }

    #[tokio::test]
    async fn test_cosmetic_edits_stay_local() {
        let remote = MemoryApi::new().with_users(users());
        let mut state = DashboardState::new();
        state.replace_users(remote.fetch_users().await.unwrap());
        let calls_after_load = remote.calls();

        state.remove_user(0);
        state.apply_user_edit(
            0,
            UserEdit {
                name: "Bea".into(),
                email: "bea@x.com".into(),
                password: "x".into(),
            },
        );

        assert_eq!(remote.calls(), calls_after_load);
        // The server still has the original list.
        assert_eq!(remote.fetch_users().await.unwrap(), users());
        assert_eq!(state.users().len(), 2);
    }
}

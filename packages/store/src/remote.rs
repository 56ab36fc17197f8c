//! # Remote admin API seam
//!
//! [`RemoteApi`] is the async interface the dashboard consumes. The HTTP client
//! lives in the `api` crate; [`crate::MemoryApi`] is the in-memory stand-in.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | `fetch_bookings` | `GET /api/bookings` |
//! | `fetch_users` | `GET /api/users/getall` |
//! | `delete_all_bookings` | `DELETE /api/deleteall/bookings` |

use std::fmt::Display;
use std::future::Future;

use crate::dialog::Confirmation;
use crate::models::{Booking, User};

/// Async interface to the bookings/users service.
pub trait RemoteApi {
    type Error: Display;

    fn fetch_bookings(&self) -> impl Future<Output = Result<Vec<Booking>, Self::Error>>;

    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, Self::Error>>;

    fn delete_all_bookings(&self) -> impl Future<Output = Result<(), Self::Error>>;
}

/// What happened to a delete-all request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteAllOutcome {
    Deleted,
    Skipped,
}

/// Delete every booking on the server, but only once the admin confirmed.
///
/// There is no undo and no server-side copy. A cancelled confirmation returns
/// [`DeleteAllOutcome::Skipped`] without touching the remote.
pub async fn delete_all_bookings<R: RemoteApi>(
    remote: &R,
    confirmation: Confirmation,
) -> Result<DeleteAllOutcome, R::Error> {
    if !confirmation.is_confirmed() {
        tracing::debug!("delete-all bookings cancelled");
        return Ok(DeleteAllOutcome::Skipped);
    }
    match remote.delete_all_bookings().await {
        Ok(()) => {
            tracing::info!("all bookings deleted");
            Ok(DeleteAllOutcome::Deleted)
        }
        Err(e) => {
            tracing::error!("Error deleting all bookings: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryApi, RemoteCall};

    #[tokio::test]
    async fn test_cancelled_delete_all_makes_no_call() {
        let remote = MemoryApi::new().with_bookings(vec![Booking::default()]);
        let outcome = delete_all_bookings(&remote, Confirmation::Cancelled)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteAllOutcome::Skipped);
        assert!(remote.calls().is_empty());
        assert_eq!(remote.fetch_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_all() {
        let remote = MemoryApi::new().with_bookings(vec![Booking::default(), Booking::default()]);
        let outcome = delete_all_bookings(&remote, Confirmation::Confirmed)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteAllOutcome::Deleted);
        assert_eq!(remote.calls(), vec![RemoteCall::DeleteAllBookings]);
        assert!(remote.fetch_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_failure_is_returned() {
        let remote = MemoryApi::new().failing();
        let result = delete_all_bookings(&remote, Confirmation::Confirmed).await;
        assert!(result.is_err());
    }
}

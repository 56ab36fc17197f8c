//! # API crate — client for the bookings/users admin service
//!
//! The dashboard never owns the data it shows; it reads and deletes through the
//! remote admin API described below. This crate provides the HTTP implementation
//! of [`store::RemoteApi`].
//!
//! | Endpoint | Method | Used by |
//! |----------|--------|---------|
//! | `/api/bookings` | `GET` | [`HttpApi`] → `fetch_bookings` (bare JSON array) |
//! | `/api/users/getall` | `GET` | [`HttpApi`] → `fetch_users` (`{ "users": [...] }`) |
//! | `/api/deleteall/bookings` | `DELETE` | [`HttpApi`] → `delete_all_bookings` |
//!
//! Cosmetic user edits and deletes are view-only and have no endpoint here.

mod client;
mod error;

pub use client::{HttpApi, BOOKINGS_PATH, DELETE_ALL_BOOKINGS_PATH, USERS_PATH};
pub use error::ApiError;

pub use store::{Booking, RemoteApi, User};

//! # View-owned dashboard state
//!
//! [`DashboardState`] holds the two collections shown on the dashboard. It is
//! owned by the view (a single signal in the UI) and has no handle to the remote
//! API, so nothing here can reach the network:
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`replace_bookings`](DashboardState::replace_bookings) / [`replace_users`](DashboardState::replace_users) | Swap in a freshly fetched collection wholesale. |
//! | [`clear_bookings`](DashboardState::clear_bookings) | Empty the bookings after the server confirmed delete-all. |
//! | [`remove_user`](DashboardState::remove_user) | Cosmetic delete of one row. |
//! | [`apply_user_edit`](DashboardState::apply_user_edit) | Cosmetic update of one row's name, email and password. |
//!
//! The user-list edits are never sent to the server and are lost on the next
//! refresh.

use crate::dialog::UserEdit;
use crate::models::{Booking, User};

/// Progress of one collection's fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Local view state for the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    bookings: Vec<Booking>,
    users: Vec<User>,
    bookings_status: LoadStatus,
    users_status: LoadStatus,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn bookings_status(&self) -> &LoadStatus {
        &self.bookings_status
    }

    pub fn users_status(&self) -> &LoadStatus {
        &self.users_status
    }

    pub fn mark_bookings_loading(&mut self) {
        self.bookings_status = LoadStatus::Loading;
    }

    pub fn mark_users_loading(&mut self) {
        self.users_status = LoadStatus::Loading;
    }

    /// The previous collection is kept when a fetch fails.
    pub fn mark_bookings_failed(&mut self, reason: impl Into<String>) {
        self.bookings_status = LoadStatus::Failed(reason.into());
    }

    pub fn mark_users_failed(&mut self, reason: impl Into<String>) {
        self.users_status = LoadStatus::Failed(reason.into());
    }

    pub fn replace_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.bookings_status = LoadStatus::Loaded;
    }

    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.users_status = LoadStatus::Loaded;
    }

    pub fn clear_bookings(&mut self) {
        self.bookings.clear();
    }

    /// Drop the user at `index`, keeping the others in order.
    /// Out-of-range indexes leave the list untouched.
    pub fn remove_user(&mut self, index: usize) -> Option<User> {
        if index < self.users.len() {
            Some(self.users.remove(index))
        } else {
            None
        }
    }

    /// Overwrite name, email and password of the user at `index`.
    ///
    /// Returns `false` without touching anything when the index is out of range
    /// or any of the three values is empty.
    pub fn apply_user_edit(&mut self, index: usize, edit: UserEdit) -> bool {
        if !edit.is_complete() {
            return false;
        }
        let Some(user) = self.users.get_mut(index) else {
            return false;
        };
        user.name = edit.name;
        user.email = edit.email;
        user.password = edit.password;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            password: format!("{name}-pw"),
        }
    }

    fn state_with_users(names: &[&str]) -> DashboardState {
        let mut state = DashboardState::new();
        state.replace_users(names.iter().map(|n| user(n)).collect());
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::new();
        assert!(state.bookings().is_empty());
        assert!(state.users().is_empty());
        assert_eq!(state.bookings_status(), &LoadStatus::Loading);
        assert_eq!(state.users_status(), &LoadStatus::Loading);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = state_with_users(&["Ann", "Ben"]);
        state.replace_users(vec![user("Cat")]);
        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users()[0].name, "Cat");
        assert_eq!(state.users_status(), &LoadStatus::Loaded);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_collection() {
        let mut state = state_with_users(&["Ann"]);
        state.mark_users_failed("timeout");
        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users_status(), &LoadStatus::Failed("timeout".into()));
    }

    #[test]
    fn test_remove_user_preserves_order() {
        let mut state = state_with_users(&["Ann", "Ben", "Cat", "Dan"]);
        let removed = state.remove_user(1);
        assert_eq!(removed.map(|u| u.name), Some("Ben".to_string()));
        let names: Vec<_> = state.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Cat", "Dan"]);
    }

    #[test]
    fn test_remove_user_out_of_range() {
        let mut state = state_with_users(&["Ann"]);
        assert!(state.remove_user(5).is_none());
        assert_eq!(state.users().len(), 1);
    }

    #[test]
    fn test_apply_user_edit_touches_only_target() {
        let mut state = state_with_users(&["Ann", "Ben", "Cat"]);
        let before = state.users().to_vec();

        let applied = state.apply_user_edit(
            1,
            UserEdit {
                name: "Bea".into(),
                email: "bea@x.com".into(),
                password: "new-pw".into(),
            },
        );

        assert!(applied);
        assert_eq!(state.users()[0], before[0]);
        assert_eq!(state.users()[2], before[2]);
        assert_eq!(state.users()[1].name, "Bea");
        assert_eq!(state.users()[1].email, "bea@x.com");
        assert_eq!(state.users()[1].password, "new-pw");
    }

    #[test]
    fn test_apply_user_edit_rejects_blank_field() {
        let mut state = state_with_users(&["Ann"]);
        let before = state.clone();
        let applied = state.apply_user_edit(
            0,
            UserEdit {
                name: "Zed".into(),
                email: String::new(),
                password: "pw".into(),
            },
        );
        assert!(!applied);
        assert_eq!(state, before);

        let complete = UserEdit {
            name: "Zed".into(),
            email: "z@x.com".into(),
            password: "pw".into(),
        };
        assert!(!state.apply_user_edit(3, complete));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_bookings() {
        let mut state = DashboardState::new();
        state.replace_bookings(vec![Booking::default(), Booking::default()]);
        state.clear_bookings();
        assert!(state.bookings().is_empty());
    }
}

//! Results returned by the dashboard's modal dialogs.
//!
//! Dialogs never block: they render, and report back through one of these
//! values when the admin clicks a button or dismisses the overlay.

use crate::models::User;

/// Answer to a yes/no confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Answer to a form dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogResult<T> {
    Submitted(T),
    Cancelled,
}

impl<T> DialogResult<T> {
    pub fn submitted(self) -> Option<T> {
        match self {
            DialogResult::Submitted(value) => Some(value),
            DialogResult::Cancelled => None,
        }
    }
}

/// New values for the three editable user fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserEdit {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserEdit {
    /// Prefill from the current record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }

    /// An edit only applies when every field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_edit_completeness() {
        let user = User {
            name: "Bo".into(),
            email: "b@x.com".into(),
            password: "pw".into(),
        };
        let mut edit = UserEdit::from_user(&user);
        assert!(edit.is_complete());

        edit.password.clear();
        assert!(!edit.is_complete());
    }

    #[test]
    fn test_dialog_result_submitted() {
        assert_eq!(DialogResult::Submitted(3).submitted(), Some(3));
        assert_eq!(DialogResult::<i32>::Cancelled.submitted(), None);
        assert!(Confirmation::Confirmed.is_confirmed());
        assert!(!Confirmation::Cancelled.is_confirmed());
    }
}

//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::DashboardView;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod backend;
pub use backend::{Backend, BackendError};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogFilter, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod edit_user_dialog;
pub use edit_user_dialog::EditUserDialog;

mod tables;
pub use tables::{BookingsTable, UsersTable};

pub mod notice;
pub use notice::{NoticeKind, NoticeStack, Notices};

pub mod download;
pub use download::DownloadError;

mod locale;
pub use locale::{viewer_dates, viewer_locale};

use dioxus::prelude::*;
use report::{bookings_report, users_report, ReportDocument};
use store::{
    delete_all_bookings, Confirmation, DashboardConfig, DashboardState, DeleteAllOutcome,
    DialogResult, LoadStatus, RemoteApi, UserEdit,
};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::backend::Backend;
use crate::components::{Button, ButtonVariant};
use crate::download::{save_report, DownloadError};
use crate::icons::{FaArrowsRotate, FaFilePdf, FaTrash};
use crate::locale::viewer_dates;
use crate::notice::{show_notice, NoticeKind, NoticeStack, Notices};
use crate::{
    ActivityLogPanel, ActivityLogToggle, BookingsTable, ConfirmDialog, EditUserDialog, Icon,
    UsersTable,
};

/// Which modal is open.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Dialog {
    DeleteAllBookings,
    UpdateUser(usize),
    DeleteUser(usize),
}

/// The admin dashboard: bookings and users side by side.
///
/// Expects a [`Backend`], a [`DashboardConfig`] and a `Signal<ActivityLog>` in
/// context.
#[component]
pub fn DashboardView() -> Element {
    let backend = use_context::<Backend>();
    let config = use_context::<DashboardConfig>();
    let dates = use_hook(|| viewer_dates(&config));
    let mut state = use_signal(DashboardState::new);
    let mut dialog = use_signal(|| Option::<Dialog>::None);
    let notices = use_signal(Notices::default);
    let mut log = use_activity_log();
    let mut generation = use_signal(|| 0u32);

    // The two fetches are independent; either may land first.
    let bookings_backend = backend.clone();
    let _bookings = use_resource(move || {
        let backend = bookings_backend.clone();
        let _ = generation();
        async move { load_bookings(backend, state, log).await }
    });

    let users_backend = backend.clone();
    let _users = use_resource(move || {
        let backend = users_backend.clone();
        let _ = generation();
        async move { load_users(backend, state, log).await }
    });

    let export_bookings = move |_| {
        let document = bookings_report(state.read().bookings(), &dates);
        export_report(document, notices, log);
    };

    let export_users = move |_| {
        let document = users_report(state.read().users());
        export_report(document, notices, log);
    };

    let delete_backend = backend.clone();
    let on_delete_all_closed = move |answer: Confirmation| {
        dialog.set(None);
        let backend = delete_backend.clone();
        spawn(async move {
            match delete_all_bookings(&backend, answer).await {
                Ok(DeleteAllOutcome::Deleted) => {
                    state.write().clear_bookings();
                    log_activity(&mut log, LogLevel::Success, "All bookings deleted");
                    show_notice(notices, NoticeKind::Success, "All bookings have been deleted.");
                }
                Ok(DeleteAllOutcome::Skipped) => {
                    log_activity(&mut log, LogLevel::Info, "Delete all bookings cancelled");
                }
                Err(e) => {
                    log_activity(
                        &mut log,
                        LogLevel::Error,
                        &format!("Error deleting all bookings: {e}"),
                    );
                    show_notice(notices, NoticeKind::Error, "Failed to delete bookings.");
                }
            }
        });
    };

    let dialog_view = match dialog() {
        None => rsx! {},
        Some(Dialog::DeleteAllBookings) => rsx! {
            ConfirmDialog {
                title: "Delete all bookings?",
                message: "Are you sure you want to delete all bookings? This cannot be undone.",
                confirm_label: "Delete all",
                destructive: true,
                on_close: on_delete_all_closed,
            }
        },
        Some(Dialog::UpdateUser(index)) => {
            let user = state.read().users().get(index).cloned();
            match user {
                Some(user) => rsx! {
                    EditUserDialog {
                        user,
                        on_close: move |result: DialogResult<UserEdit>| {
                            dialog.set(None);
                            if let Some(edit) = result.submitted() {
                                if state.write().apply_user_edit(index, edit) {
                                    log_activity(&mut log, LogLevel::Info, &format!("Updated user #{} locally", index + 1));
                                } else {
                                    log_activity(&mut log, LogLevel::Warning, "User update ignored: every field is required");
                                }
                            }
                        },
                    }
                },
                None => rsx! {},
            }
        }
        Some(Dialog::DeleteUser(index)) => rsx! {
            ConfirmDialog {
                title: "Delete user?",
                message: "Are you sure you want to delete this user?",
                confirm_label: "Delete",
                destructive: true,
                on_close: move |answer: Confirmation| {
                    dialog.set(None);
                    if answer.is_confirmed() {
                        if let Some(user) = state.write().remove_user(index) {
                            log_activity(&mut log, LogLevel::Info, &format!("Removed {} from the list", user.email));
                        }
                    }
                },
            }
        },
    };

    let current = state.read();
    let bookings = current.bookings().to_vec();
    let users = current.users().to_vec();
    let bookings_status = current.bookings_status().clone();
    let users_status = current.users_status().clone();
    drop(current);

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h1 { "Admin Dashboard" }
                div {
                    class: "dashboard-header-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        title: "Fetch bookings and users again",
                        onclick: move |_| *generation.write() += 1,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Refresh"
                    }
                    ActivityLogToggle {}
                }
            }

            if backend.is_offline() {
                div {
                    class: "offline-banner",
                    "Offline preview: the configured API address is not usable."
                }
            }

            NoticeStack { notices }

            section {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h2 { "Bookings" }
                    StatusLine { status: bookings_status, what: "bookings" }
                    div {
                        class: "section-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: export_bookings,
                            Icon { icon: FaFilePdf, width: 14, height: 14 }
                            " Export PDF"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| dialog.set(Some(Dialog::DeleteAllBookings)),
                            Icon { icon: FaTrash, width: 14, height: 14 }
                            " Delete all"
                        }
                    }
                }
                BookingsTable { bookings, dates }
            }

            section {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h2 { "Users" }
                    StatusLine { status: users_status, what: "users" }
                    div {
                        class: "section-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: export_users,
                            Icon { icon: FaFilePdf, width: 14, height: 14 }
                            " Export PDF"
                        }
                    }
                }
                UsersTable {
                    users,
                    on_update: move |index| dialog.set(Some(Dialog::UpdateUser(index))),
                    on_delete: move |index| dialog.set(Some(Dialog::DeleteUser(index))),
                }
            }

            {dialog_view}

            ActivityLogPanel {}
        }
    }
}

#[component]
fn StatusLine(status: LoadStatus, what: &'static str) -> Element {
    match status {
        LoadStatus::Loading => rsx! {
            span { class: "status-line", "Loading {what}…" }
        },
        LoadStatus::Loaded => rsx! {},
        LoadStatus::Failed(_) => rsx! {
            span { class: "status-line failed", "Could not load {what}. See the activity log." }
        },
    }
}

async fn load_bookings<R: RemoteApi>(
    remote: R,
    mut state: Signal<DashboardState>,
    mut log: Signal<ActivityLog>,
) {
    state.write().mark_bookings_loading();
    match remote.fetch_bookings().await {
        Ok(bookings) => {
            log_activity(
                &mut log,
                LogLevel::Success,
                &format!("Fetched {} bookings", bookings.len()),
            );
            state.write().replace_bookings(bookings);
        }
        Err(e) => {
            log_activity(&mut log, LogLevel::Error, &format!("Error fetching bookings: {e}"));
            state.write().mark_bookings_failed(e.to_string());
        }
    }
}

async fn load_users<R: RemoteApi>(
    remote: R,
    mut state: Signal<DashboardState>,
    mut log: Signal<ActivityLog>,
) {
    state.write().mark_users_loading();
    match remote.fetch_users().await {
        Ok(users) => {
            log_activity(
                &mut log,
                LogLevel::Success,
                &format!("Fetched {} users", users.len()),
            );
            state.write().replace_users(users);
        }
        Err(e) => {
            log_activity(&mut log, LogLevel::Error, &format!("Error fetching users: {e}"));
            state.write().mark_users_failed(e.to_string());
        }
    }
}

fn export_report(document: ReportDocument, notices: Signal<Notices>, mut log: Signal<ActivityLog>) {
    let saved = document
        .to_file()
        .map_err(DownloadError::from)
        .and_then(|file| save_report(&file));
    match saved {
        Ok(location) => {
            log_activity(
                &mut log,
                LogLevel::Success,
                &format!("Exported {} rows to {location}", document.rows().len()),
            );
        }
        Err(e) => {
            log_activity(
                &mut log,
                LogLevel::Error,
                &format!("Error exporting {}: {e}", document.title()),
            );
            show_notice(
                notices,
                NoticeKind::Error,
                format!("Could not export {}.", document.file_name()),
            );
        }
    }
}

//! On-screen tables. Cell text comes from the same row mappers the PDF
//! reports use, so screen and export always agree.

use dioxus::prelude::*;
use report::{booking_row, user_row, DateFormatter, BOOKING_COLUMNS, USER_COLUMNS};
use store::{Booking, User};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrash};
use crate::Icon;

#[component]
pub fn BookingsTable(bookings: Vec<Booking>, dates: DateFormatter) -> Element {
    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "data-table",
                thead {
                    tr {
                        for column in BOOKING_COLUMNS {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    if bookings.is_empty() {
                        tr {
                            td { class: "empty-row", colspan: BOOKING_COLUMNS.len() as i64, "No bookings." }
                        }
                    }
                    for (i, booking) in bookings.iter().enumerate() {
                        tr {
                            key: "{i}",
                            for cell in booking_row(booking, &dates) {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Users with per-row Update and Delete. Both only report the row index;
/// the caller decides what to do with it.
#[component]
pub fn UsersTable(
    users: Vec<User>,
    on_update: EventHandler<usize>,
    on_delete: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "data-table",
                thead {
                    tr {
                        for column in USER_COLUMNS {
                            th { "{column}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    if users.is_empty() {
                        tr {
                            td { class: "empty-row", colspan: USER_COLUMNS.len() as i64 + 1, "No users." }
                        }
                    }
                    for (i, user) in users.iter().enumerate() {
                        tr {
                            key: "{i}",
                            for cell in user_row(user) {
                                td { "{cell}" }
                            }
                            td {
                                class: "row-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Update",
                                    onclick: move |_| on_update.call(i),
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                    " Update"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    title: "Delete",
                                    onclick: move |_| on_delete.call(i),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                    " Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

//! The two concrete exports: bookings and users.

use store::{Booking, User};

use crate::date::DateFormatter;
use crate::table::{generate_report, ReportDocument};

pub const BOOKING_COLUMNS: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "Address",
    "Type",
    "Size",
    "Material",
    "Color",
    "Install Date",
];

pub const USER_COLUMNS: [&str; 3] = ["Name", "Email", "Password"];

/// Which collection a report covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Bookings,
    Users,
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Bookings => "Booking Details Report",
            ReportKind::Users => "All Users Report",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Bookings => "booking-details.pdf",
            ReportKind::Users => "user-details.pdf",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ReportKind::Bookings => &BOOKING_COLUMNS,
            ReportKind::Users => &USER_COLUMNS,
        }
    }
}

/// Display cells for one booking, in [`BOOKING_COLUMNS`] order.
pub fn booking_row(booking: &Booking, dates: &DateFormatter) -> Vec<String> {
    vec![
        booking.name.clone(),
        booking.email.clone(),
        booking.phone_number.clone(),
        booking.address_or_placeholder().to_string(),
        booking.door_or_window.clone(),
        booking.size_or_placeholder().to_string(),
        booking.material.clone(),
        booking.color.clone(),
        dates.format(booking.installation_date.as_ref()),
    ]
}

/// Display cells for one user, in [`USER_COLUMNS`] order. The password is verbatim.
pub fn user_row(user: &User) -> Vec<String> {
    vec![user.name.clone(), user.email.clone(), user.password.clone()]
}

pub fn bookings_report(bookings: &[Booking], dates: &DateFormatter) -> ReportDocument {
    let kind = ReportKind::Bookings;
    generate_report(kind.title(), kind.columns(), bookings, |b| booking_row(b, dates))
        .with_file_name(kind.file_name())
}

pub fn users_report(users: &[User]) -> ReportDocument {
    let kind = ReportKind::Users;
    generate_report(kind.title(), kind.columns(), users, user_row).with_file_name(kind.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{DateLocale, INVALID_DATE_LABEL};
    use store::DateValue;

    fn al() -> Booking {
        Booking {
            name: "Al".into(),
            email: "a@x.com".into(),
            phone_number: "123".into(),
            address: Some(String::new()),
            door_or_window: "Door".into(),
            size: None,
            material: "Wood".into(),
            color: "Brown".into(),
            installation_date: Some(DateValue::from("2024-05-01T00:00:00Z")),
        }
    }

    #[test]
    fn test_single_booking_row() {
        let doc = bookings_report(&[al()], &DateFormatter::utc(DateLocale::EnUs));
        assert_eq!(doc.title(), "Booking Details Report");
        assert_eq!(doc.columns(), BOOKING_COLUMNS);
        assert_eq!(
            doc.rows(),
            [vec!["Al", "a@x.com", "123", "-", "Door", "-", "Wood", "Brown", "5/1/2024"]]
        );
        assert_eq!(doc.file_name(), "booking-details.pdf");
    }

    #[test]
    fn test_booking_rows_keep_count_and_order() {
        let bookings: Vec<Booking> = (0..25)
            .map(|i| Booking {
                name: format!("Customer {i}"),
                address: (i % 3 == 0).then(|| format!("{i} High St")),
                ..al()
            })
            .collect();
        let doc = bookings_report(&bookings, &DateFormatter::utc(DateLocale::EnUs));
        assert_eq!(doc.rows().len(), bookings.len());
        for (i, row) in doc.rows().iter().enumerate() {
            assert_eq!(row[0], format!("Customer {i}"));
            let expected_address = if i % 3 == 0 { format!("{i} High St") } else { "-".into() };
            assert_eq!(row[3], expected_address);
        }
    }

    #[test]
    fn test_bad_date_does_not_fail_report() {
        let bookings = vec![
            Booking {
                installation_date: Some(DateValue::from("someday")),
                ..al()
            },
            Booking {
                installation_date: None,
                ..al()
            },
        ];
        let doc = bookings_report(&bookings, &DateFormatter::utc(DateLocale::EnUs));
        assert_eq!(doc.rows()[0][8], INVALID_DATE_LABEL);
        assert_eq!(doc.rows()[1][8], INVALID_DATE_LABEL);
        assert!(doc.to_file().is_ok());
    }

    #[test]
    fn test_missing_required_fields_render_empty() {
        let doc = bookings_report(&[Booking::default()], &DateFormatter::utc(DateLocale::EnUs));
        assert_eq!(
            doc.rows()[0],
            ["", "", "", "-", "", "-", "", "", INVALID_DATE_LABEL]
        );
    }

    #[test]
    fn test_users_report_shows_password() {
        let users = vec![User {
            name: "Bo".into(),
            email: "b@x.com".into(),
            password: "hunter2".into(),
        }];
        let doc = users_report(&users);
        assert_eq!(doc.title(), "All Users Report");
        assert_eq!(doc.columns(), USER_COLUMNS);
        assert_eq!(doc.rows(), [vec!["Bo", "b@x.com", "hunter2"]]);
        assert_eq!(doc.file_name(), "user-details.pdf");
    }

    #[test]
    fn test_empty_users_report() {
        let doc = users_report(&[]);
        assert!(doc.rows().is_empty());

        let pages = doc.layout();
        assert_eq!(pages.len(), 1);
        let texts: Vec<_> = pages[0].texts().collect();
        assert_eq!(texts, ["All Users Report", "Name", "Email", "Password"]);

        let file = doc.to_file().unwrap();
        assert_eq!(file.file_name, "user-details.pdf");
        assert!(file.bytes.starts_with(b"%PDF-1.4"));
    }
}

//! # Report
//!
//! Builds the downloadable PDF tables for the dashboard.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `table` | [`ReportDocument`] and the generic [`generate_report`] |
//! | `reports` | the bookings and users instantiations |
//! | `date` | locale-aware install date cells |
//! | `layout` | A4 pagination, wrapping and striping |
//! | `pdf` | PDF 1.4 serialization |

pub mod date;
mod error;
pub mod layout;
pub mod pdf;
mod reports;
mod table;

pub use date::{DateFormatter, DateLocale, Zone, INVALID_DATE_LABEL};
pub use error::ReportError;
pub use pdf::PdfOptions;
pub use reports::{
    booking_row, bookings_report, user_row, users_report, ReportKind, BOOKING_COLUMNS,
    USER_COLUMNS,
};
pub use table::{generate_report, ReportDocument, ReportFile};

pub mod config;
pub mod dialog;
pub mod models;
pub mod remote;
pub mod state;

mod memory;
pub use memory::{MemoryApi, MemoryApiError, RemoteCall};

pub use config::{ConfigError, DashboardConfig};
pub use dialog::{Confirmation, DialogResult, UserEdit};
pub use models::{Booking, DateValue, User, MISSING_PLACEHOLDER};
pub use remote::{delete_all_bookings, DeleteAllOutcome, RemoteApi};
pub use state::{DashboardState, LoadStatus};

//! # Wire models for bookings and users
//!
//! Both shapes are owned by the remote admin API; this crate only mirrors them.
//! Decoding is deliberately forgiving so that one odd record never sinks a whole
//! collection:
//!
//! | JSON value in a text field | Decoded as |
//! |----------------------------|-----------|
//! | string | itself |
//! | number / boolean | its textual form (`123` → `"123"`) |
//! | `null`, missing, array, object | `""` (or `None` for optional fields) |
//!
//! `installationDate` is kept raw as a [`DateValue`] and only interpreted when a
//! table or report renders it (see the `report` crate's date module).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder rendered for absent or empty optional fields.
pub const MISSING_PLACEHOLDER: &str = "-";

/// A door or window installation booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub address: Option<String>,
    /// Category, e.g. `"Door"` or `"Window"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub door_or_window: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub material: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub installation_date: Option<DateValue>,
}

impl Booking {
    /// Address, or [`MISSING_PLACEHOLDER`] when absent or empty.
    pub fn address_or_placeholder(&self) -> &str {
        or_placeholder(self.address.as_deref())
    }

    /// Size, or [`MISSING_PLACEHOLDER`] when absent or empty.
    pub fn size_or_placeholder(&self) -> &str {
        or_placeholder(self.size.as_deref())
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_PLACEHOLDER,
    }
}

/// An account as listed by `/api/users/getall`. The password is shown verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: String,
}

/// Body of `GET /api/users/getall`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersPayload {
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

impl UsersPayload {
    /// A missing or `null` `users` field is an empty list.
    pub fn into_users(self) -> Vec<User> {
        self.users.unwrap_or_default()
    }
}

/// Raw installation date as sent by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// ISO-8601-ish text, e.g. `"2024-05-01T00:00:00Z"`.
    Text(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(f64),
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(value).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(value))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(DateValue::Text(s)),
        Value::Number(n) => n.as_f64().map(DateValue::EpochMillis),
        _ => None,
    })
}

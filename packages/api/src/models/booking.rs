//! # Booking model
//!
//! The body of `GET /api/student/my-booking`. A student holds at most one
//! booking; its absence is a 404, not an empty body.
//!
//! Timestamps come from a Python backend and are usually naive ISO 8601
//! (`2025-04-12T18:30:00.123456`), but RFC 3339 with an offset is accepted as
//! well. Both are kept as local wall-clock [`NaiveDateTime`].

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    /// Any other status the backend reports, such as `failed`.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Not every seat payload carries its table number.
    #[serde(default)]
    pub table_number: Option<u32>,
    pub seat_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: Option<u64>,
    pub seat: Seat,
    pub payment_status: PaymentStatus,
    pub payment_amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub booking_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub payment_date: Option<NaiveDateTime>,
}

impl Booking {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Completed
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_timestamp(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

//! Booking request and response types.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

/// Status the server assigns to an accepted booking.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Request body for `POST /services/{id}/bookings`.
///
/// Customer fields are optional and omitted from the JSON body when unset.
/// Nothing is validated client-side; the server rejects unknown slots,
/// past dates and bad customer data with an [`ApiError`](crate::error::ApiError).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    /// Date of the booking
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Time slot to book, taken from [`Service::get_time_slots`](crate::Service::get_time_slots)
    pub time_slot_id: u64,
}

impl BookingRequest {
    /// Create a request for a time slot on a date, with no customer details.
    pub fn new(time_slot_id: u64, date: OffsetDateTime) -> Self {
        Self {
            customer_name: None,
            customer_email: None,
            customer_phone: None,
            date,
            time_slot_id,
        }
    }

    /// Set the customer name.
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Set the customer email.
    pub fn customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Set the customer phone number.
    pub fn customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }
}

/// A booking created by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub service_id: u64,
    #[serde(default)]
    pub customer_id: u64,
    #[serde(default)]
    pub time_slot_id: u64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    /// Server-assigned status, e.g. "confirmed"
    #[serde(default)]
    pub status: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Booking {
    /// Check if the server confirmed the booking.
    pub fn is_confirmed(&self) -> bool {
        self.status == STATUS_CONFIRMED
    }
}

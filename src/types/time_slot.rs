//! Time slot types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A recurring weekly window in which a service can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Time slot ID
    #[serde(default)]
    pub id: u64,
    /// Owning service
    #[serde(default)]
    pub service_id: u64,
    /// Day of week index (0 = Sunday)
    #[serde(default)]
    pub day_of_week: u8,
    /// Start of the slot
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    /// End of the slot
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    /// Maximum concurrent bookings for the slot
    #[serde(default)]
    pub max_bookings: u32,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl TimeSlot {
    /// Length of the slot, if both bounds are known.
    pub fn duration(&self) -> Option<time::Duration> {
        Some(self.end_time? - self.start_time?)
    }
}

//! ReserveKit REST API endpoints and defaults.

use std::time::Duration;

/// Base URL for the ReserveKit production API.
pub const DEFAULT_HOST: &str = "https://api.reservekit.io";

/// API version segment inserted between host and path.
pub const DEFAULT_VERSION: &str = "v1";

/// Per-request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Get a service by ID.
pub fn service(service_id: u64) -> String {
    format!("/services/{service_id}")
}

/// List the time slots of a service.
pub fn time_slots(service_id: u64) -> String {
    format!("/services/{service_id}/time-slots")
}

/// Create a booking for a service.
pub fn bookings(service_id: u64) -> String {
    format!("/services/{service_id}/bookings")
}

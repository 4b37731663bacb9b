//! Request and response types for the ReserveKit API.

mod booking;
pub(crate) mod envelope;
mod service;
mod time_slot;

pub use booking::{Booking, BookingRequest, STATUS_CONFIRMED};
pub use service::ServiceData;
pub use time_slot::TimeSlot;

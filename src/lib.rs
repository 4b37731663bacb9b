//! # ReserveKit Client
//!
//! An async Rust client library for the ReserveKit booking REST API.
//!
//! ## Features
//!
//! - Typed requests and responses for services, time slots and bookings
//! - One HTTP request per call: no hidden retries, caching or pagination
//! - Structured errors that separate transport, API and decoding failures
//! - Request spans via `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reservekit::{BookingRequest, ReserveKitClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReserveKitClient::new("your-api-key")?;
//!     client.init_service(1).await?;
//!
//!     let slots = client.get_time_slots().await?;
//!     let request = BookingRequest::new(slots[0].id, time::OffsetDateTime::now_utc())
//!         .customer_name("John Doe");
//!     let booking = client.create_booking(&request).await?;
//!     println!("Created booking {}", booking.id);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use auth::ApiKey;
pub use error::{ApiError, ReserveKitError};
pub use reqwest::Method;
pub use rest::{ReserveKitClient, ReserveKitClientBuilder, Service};
pub use types::{Booking, BookingRequest, ServiceData, TimeSlot};

/// Result type alias using ReserveKitError
pub type Result<T> = std::result::Result<T, ReserveKitError>;

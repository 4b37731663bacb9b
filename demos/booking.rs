//! Example: Initialize a service, list its time slots and book the first one.
//!
//! Reads `RESERVEKIT_API_KEY` (and optionally `RESERVEKIT_HOST`,
//! `RESERVEKIT_API_VERSION`) from the environment or a `.env` file.
//!
//! Run with: cargo run --example booking -- <service-id>

use reservekit::{BookingRequest, ReserveKitClient, ReserveKitError};
use time::{Duration, OffsetDateTime};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service_id = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(1);

    let client = ReserveKitClient::from_env()?;

    println!("=== Service {} ===", service_id);
    let service = match client.init_service(service_id).await {
        Ok(service) => service,
        Err(err) if err.api_error().is_some_and(|e| e.is_not_found()) => {
            println!("Service {} does not exist", service_id);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("{} ({})", service.data().name, service.data().timezone);

    println!("\n=== Time Slots ===");
    let slots = client.get_time_slots().await?;
    println!("Found {} time slots", slots.len());
    for slot in &slots {
        println!(
            "#{} day={} {:?} - {:?} (max {})",
            slot.id, slot.day_of_week, slot.start_time, slot.end_time, slot.max_bookings
        );
    }

    let Some(slot) = slots.first() else {
        println!("No time slots to book");
        return Ok(());
    };

    println!("\n=== Booking ===");
    let request = BookingRequest::new(slot.id, OffsetDateTime::now_utc() + Duration::days(1))
        .customer_name("John Doe")
        .customer_email("john@example.com")
        .customer_phone("+1234567890");

    match client.create_booking(&request).await {
        Ok(booking) => println!("Created booking with ID: {} ({})", booking.id, booking.status),
        Err(ReserveKitError::Api(err)) if err.is_conflict() => {
            println!("Slot #{} is fully booked: {}", slot.id, err.message)
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

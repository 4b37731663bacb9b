//! Resource accessors scoped to one ReserveKit service.

use std::sync::Arc;

use crate::error::ReserveKitError;
use crate::rest::client::Transport;
use crate::rest::endpoints;
use crate::types::envelope::{DataEnvelope, TimeSlotList};
use crate::types::{Booking, BookingRequest, ServiceData, TimeSlot};

/// An initialized ReserveKit service.
///
/// Returned by [`ReserveKitClient::init_service`](crate::ReserveKitClient::init_service)
/// and [`ReserveKitClient::get_service`](crate::ReserveKitClient::get_service). Holds the
/// decoded service record and a handle to the client's transport, so time slots
/// and bookings can be requested without passing the service ID again.
#[derive(Clone)]
pub struct Service {
    data: ServiceData,
    transport: Arc<Transport>,
}

impl Service {
    pub(crate) fn new(transport: Arc<Transport>, data: ServiceData) -> Self {
        Self { data, transport }
    }

    /// Service ID.
    pub fn id(&self) -> u64 {
        self.data.id
    }

    /// The service record as returned by the API.
    pub fn data(&self) -> &ServiceData {
        &self.data
    }

    /// Consume the handle, keeping only the service record.
    pub fn into_data(self) -> ServiceData {
        self.data
    }

    /// Get the time slots of this service.
    ///
    /// Slots are returned in server order. A service with no slots yields an
    /// empty vector.
    pub async fn get_time_slots(&self) -> Result<Vec<TimeSlot>, ReserveKitError> {
        let response: DataEnvelope<TimeSlotList> =
            self.transport.get(&endpoints::time_slots(self.id())).await?;
        Ok(response.data.time_slots)
    }

    /// Create a booking on this service.
    ///
    /// # Arguments
    ///
    /// * `request` - Customer details, date and time slot to book
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<Booking, ReserveKitError> {
        let response: DataEnvelope<Booking> = self
            .transport
            .post(&endpoints::bookings(self.id()), request)
            .await?;
        Ok(response.data)
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service").field("data", &self.data).finish()
    }
}

impl PartialEq for Service {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

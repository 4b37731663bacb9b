//! Response envelopes wrapping every ReserveKit success payload.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::types::TimeSlot;

/// `{"data": T}`
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Payload of `GET /services/{id}/time-slots`.
///
/// A service without slots may send `"time_slots": null` or omit the field.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct TimeSlotList {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub time_slots: Vec<TimeSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_time_slots_decode_empty() {
        let list: DataEnvelope<TimeSlotList> =
            serde_json::from_str(r#"{"data":{"time_slots":null}}"#).unwrap();
        assert!(list.data.time_slots.is_empty());
    }

    #[test]
    fn test_missing_time_slots_decode_empty() {
        let list: DataEnvelope<TimeSlotList> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(list.data.time_slots.is_empty());
    }
}

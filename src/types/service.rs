//! Service resource types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A bookable service as returned by `GET /services/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceData {
    /// Service ID
    #[serde(default)]
    pub id: u64,
    /// Owning provider
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// IANA timezone the service's slots are expressed in
    #[serde(default)]
    pub timezone: String,
    /// Server-side revision counter
    #[serde(default)]
    pub version: i64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

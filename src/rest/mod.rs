//! ReserveKit REST API client.
//!
//! This module provides the REST API client and the per-service accessors.

mod client;
mod endpoints;
mod service;

pub use client::{HOST_ENV, ReserveKitClient, ReserveKitClientBuilder, VERSION_ENV};
pub use endpoints::{DEFAULT_HOST, DEFAULT_TIMEOUT, DEFAULT_VERSION};
pub use service::Service;

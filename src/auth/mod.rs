//! Authentication module for the ReserveKit API.
//!
//! ReserveKit authenticates every request with a static bearer token. The
//! key is held in a [`secrecy::SecretString`] and redacted from `Debug`.

mod credentials;

pub use credentials::{API_KEY_ENV, ApiKey};

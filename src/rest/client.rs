//! ReserveKit REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use url::Url;

use crate::auth::{API_KEY_ENV, ApiKey};
use crate::error::{ApiError, ReserveKitError};
use crate::rest::endpoints::{self, DEFAULT_HOST, DEFAULT_TIMEOUT, DEFAULT_VERSION};
use crate::rest::service::Service;
use crate::types::envelope::DataEnvelope;
use crate::types::{Booking, BookingRequest, ServiceData, TimeSlot};

/// Environment variable overriding the API host in [`ReserveKitClient::from_env`].
pub const HOST_ENV: &str = "RESERVEKIT_HOST";

/// Environment variable overriding the API version in [`ReserveKitClient::from_env`].
pub const VERSION_ENV: &str = "RESERVEKIT_API_VERSION";

/// The ReserveKit REST API client.
///
/// Every call performs exactly one HTTP request with a bearer token and a
/// fixed timeout. Nothing is retried or cached.
///
/// The client also holds the currently initialized [`Service`], which the
/// [`get_time_slots`](Self::get_time_slots) and
/// [`create_booking`](Self::create_booking) shortcuts operate on. Clones share
/// the same session.
///
/// # Example
///
/// ```rust,no_run
/// use reservekit::ReserveKitClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ReserveKitClient::new("your-api-key")?;
///
///     let service = client.init_service(1).await?;
///     let slots = service.get_time_slots().await?;
///     println!("{} has {} time slots", service.data().name, slots.len());
///
///     Ok(())
/// }
/// ```
///
/// Pointing at a different deployment:
///
/// ```rust,no_run
/// use reservekit::ReserveKitClient;
///
/// # fn main() -> Result<(), reservekit::ReserveKitError> {
/// let client = ReserveKitClient::builder("your-api-key")
///     .host("https://staging.reservekit.io")
///     .version("v2")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ReserveKitClient {
    transport: Arc<Transport>,
    session: Arc<watch::Sender<Option<Service>>>,
}

impl ReserveKitClient {
    /// Create a client for the production API with default settings.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, ReserveKitError> {
        Self::builder(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<ApiKey>) -> ReserveKitClientBuilder {
        ReserveKitClientBuilder::new(api_key)
    }

    /// Create a client from `RESERVEKIT_API_KEY`, honoring the optional
    /// `RESERVEKIT_HOST` and `RESERVEKIT_API_VERSION` overrides.
    pub fn from_env() -> Result<Self, ReserveKitError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a client from configuration variables resolved by `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ReserveKitError> {
        let api_key = lookup(API_KEY_ENV).map(ApiKey::new).ok_or_else(|| {
            ReserveKitError::InvalidConfig(format!("environment variable {API_KEY_ENV} not set"))
        })?;

        let mut builder = Self::builder(api_key);
        if let Some(host) = lookup(HOST_ENV) {
            builder = builder.host(host);
        }
        if let Some(version) = lookup(VERSION_ENV) {
            builder = builder.version(version);
        }
        builder.build()
    }

    /// The `{host}/{version}` prefix every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }

    /// Fetch a service without touching the session.
    pub async fn get_service(&self, service_id: u64) -> Result<Service, ReserveKitError> {
        let response: DataEnvelope<ServiceData> =
            self.transport.get(&endpoints::service(service_id)).await?;
        Ok(Service::new(Arc::clone(&self.transport), response.data))
    }

    /// Fetch a service and make it the current session.
    ///
    /// Any previous session is replaced. On failure the session is left as it
    /// was and the error is wrapped in [`ReserveKitError::InitService`].
    pub async fn init_service(&self, service_id: u64) -> Result<Service, ReserveKitError> {
        let service = self
            .get_service(service_id)
            .await
            .map_err(|err| ReserveKitError::InitService {
                service_id,
                source: Box::new(err),
            })?;

        let previous = self.session.send_replace(Some(service.clone()));
        tracing::debug!(
            service_id = service.id(),
            previous = previous.as_ref().map(Service::id),
            "initialized ReserveKit service"
        );
        Ok(service)
    }

    /// The currently initialized service, if any.
    pub fn service(&self) -> Option<Service> {
        self.session.borrow().clone()
    }

    /// List the time slots of the current service.
    ///
    /// Returns [`ReserveKitError::ServiceNotInitialized`] if
    /// [`init_service`](Self::init_service) has not succeeded yet.
    pub async fn get_time_slots(&self) -> Result<Vec<TimeSlot>, ReserveKitError> {
        self.require_service()?.get_time_slots().await
    }

    /// Create a booking on the current service.
    ///
    /// Returns [`ReserveKitError::ServiceNotInitialized`] if
    /// [`init_service`](Self::init_service) has not succeeded yet.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<Booking, ReserveKitError> {
        self.require_service()?.create_booking(request).await
    }

    /// Send a request to an arbitrary path and decode the response into `T`.
    ///
    /// `path` is relative to [`base_url`](Self::base_url) and must start with `/`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ReserveKitError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        self.transport.execute(method, path, body).await
    }

    /// Like [`request`](Self::request), but discards the response body.
    pub async fn request_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ReserveKitError>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        self.transport.execute_discard(method, path, body).await
    }

    fn require_service(&self) -> Result<Service, ReserveKitError> {
        self.service().ok_or(ReserveKitError::ServiceNotInitialized)
    }
}

impl std::fmt::Debug for ReserveKitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReserveKitClient")
            .field("base_url", &self.transport.base_url)
            .field("service", &self.session.borrow().as_ref().map(Service::id))
            .finish()
    }
}

/// Builder for [`ReserveKitClient`].
pub struct ReserveKitClientBuilder {
    api_key: ApiKey,
    host: String,
    version: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ReserveKitClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the API host (useful for testing with a mock server).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API version path segment.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ReserveKitClient, ReserveKitError> {
        let host = Url::parse(&self.host).map_err(|e| {
            ReserveKitError::InvalidConfig(format!("invalid host {:?}: {}", self.host, e))
        })?;
        if !matches!(host.scheme(), "http" | "https") {
            return Err(ReserveKitError::InvalidConfig(format!(
                "unsupported scheme {:?} in host {:?}",
                host.scheme(),
                self.host
            )));
        }

        let host = self.host.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        let base_url = if version.is_empty() {
            host.to_string()
        } else {
            format!("{host}/{version}")
        };

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("reservekit-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("reservekit-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ReserveKitError::InvalidConfig(e.to_string()))?;

        // Tracing only: ReserveKit calls are never retried.
        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(ReserveKitClient {
            transport: Arc::new(Transport {
                http_client,
                base_url,
                api_key: self.api_key,
            }),
            session: Arc::new(watch::Sender::new(None)),
        })
    }
}

/// The single-request pipeline shared by the client and its services.
pub(crate) struct Transport {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: ApiKey,
}

impl Transport {
    /// Make a GET request.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ReserveKitError>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ReserveKitError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Send one request and decode a success body into `T`.
    pub(crate) async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ReserveKitError>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.send(method, path, body).await?;
        serde_json::from_str(&body).map_err(|source| ReserveKitError::Decode {
            status,
            body,
            source,
        })
    }

    /// Send one request and ignore a success body.
    pub(crate) async fn execute_discard(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(), ReserveKitError> {
        self.send(method, path, body).await.map(|_| ())
    }

    /// Perform the HTTP exchange and map error statuses.
    ///
    /// Returns the status and raw body of a response below 400.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(u16, String), ReserveKitError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending ReserveKit request");

        let mut request = self
            .http_client
            .request(method, &url)
            .bearer_auth(self.api_key.expose_secret());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, %url, "received ReserveKit response");

        if status >= 400 {
            return Err(parse_error_body(status, body));
        }
        Ok((status, body))
    }
}

/// Decode an error response into [`ReserveKitError::Api`].
///
/// An error body without a `status` field takes the HTTP status.
fn parse_error_body(status: u16, body: String) -> ReserveKitError {
    match serde_json::from_str::<ApiError>(&body) {
        Ok(mut api_error) => {
            if api_error.status == 0 {
                api_error.status = status;
            }
            ReserveKitError::Api(api_error)
        }
        Err(source) => ReserveKitError::Decode {
            status,
            body,
            source,
        },
    }
}

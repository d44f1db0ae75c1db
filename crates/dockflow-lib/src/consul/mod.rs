//! Consul key-value client for service scale and deployment color
//!
//! Provides production (Live) and test (Mock) implementations of the
//! key-value operations. Keys live under `docker-flow/<service>/`.

pub mod color;
pub mod scale;

pub use color::{BLUE_COLOR, DEFAULT_COLOR, GREEN_COLOR, next_color};
pub use scale::{MIN_SCALE, ScaleDelta};

use crate::networking::NetworkingManager;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Root of every key this crate reads or writes
pub const KV_PREFIX: &str = "docker-flow";

/// Characters escaped when a service name is placed in a key path
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Consul key-value errors
#[derive(Debug, Error)]
pub enum ConsulError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {url}: {status}")]
    UnexpectedStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Invalid scale '{delta}': {reason}")]
    InvalidScaleDelta { delta: String, reason: String },
}

/// Per-service keys kept in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKey {
    Scale,
    Color,
}

impl ServiceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKey::Scale => "scale",
            ServiceKey::Color => "color",
        }
    }

    /// Key path relative to the KV root, e.g. `docker-flow/api/scale`
    pub fn path(&self, service_name: &str) -> String {
        format!(
            "{}/{}/{}",
            KV_PREFIX,
            utf8_percent_encode(service_name, SEGMENT),
            self.as_str()
        )
    }

    /// Full KV endpoint URL for this key
    pub fn url(&self, base_url: &str, service_name: &str) -> String {
        format!(
            "{}/v1/kv/{}",
            base_url.trim_end_matches('/'),
            self.path(service_name)
        )
    }
}

/// Trait for the scale/color operations against a key-value store
pub trait ConsulClient {
    /// Compute the desired replica count for a service
    ///
    /// # Arguments
    /// * `base_url` - Consul address, e.g. `http://localhost:8500`
    /// * `service_name` - Service whose scale is read
    /// * `delta` - Empty, `+N`, `-N` or an absolute `N`
    ///
    /// # Returns
    /// The stored scale with `delta` applied, never less than [`MIN_SCALE`]
    fn get_scale_calc(
        &self,
        base_url: &str,
        service_name: &str,
        delta: &str,
    ) -> impl std::future::Future<Output = Result<u32, ConsulError>> + Send;

    /// Read the active deployment color, [`DEFAULT_COLOR`] when none is stored
    fn get_color(
        &self,
        base_url: &str,
        service_name: &str,
    ) -> impl std::future::Future<Output = Result<String, ConsulError>> + Send;

    /// Color to deploy into after `current`
    fn get_next_color(&self, current: &str) -> &'static str {
        next_color(current)
    }

    /// Store the scale, returning the raw store response
    fn put_scale(
        &self,
        base_url: &str,
        service_name: &str,
        value: u32,
    ) -> impl std::future::Future<Output = Result<String, ConsulError>> + Send;

    /// Store the color, returning the raw store response
    fn put_color(
        &self,
        base_url: &str,
        service_name: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<String, ConsulError>> + Send;
}

/// Live Consul client (production)
#[derive(Debug, Clone)]
pub struct LiveConsulClient {
    networking: Arc<NetworkingManager>,
}

impl LiveConsulClient {
    pub fn new(networking: Arc<NetworkingManager>) -> Self {
        Self { networking }
    }

    /// GET a raw value; 404 and an empty body both mean "absent"
    async fn get_raw(&self, url: &str) -> Result<Option<String>, ConsulError> {
        let url = format!("{}?raw", url);
        debug!(url = %url, "Reading key");

        let response = self.networking.client().get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            trace!(url = %url, "Key not found");
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConsulError::UnexpectedStatus { url, status, body });
        }

        if self.networking.trace_requests() {
            trace!(url = %url, body = %body, "Key read");
        }

        Ok(Some(body).filter(|b| !b.trim().is_empty()))
    }

    async fn put_raw(&self, url: String, value: String) -> Result<String, ConsulError> {
        debug!(url = %url, value = %value, "Writing key");

        let response = self.networking.client().put(&url).body(value).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ConsulError::UnexpectedStatus { url, status, body });
        }

        Ok(body)
    }
}

impl ConsulClient for LiveConsulClient {
    async fn get_scale_calc(
        &self,
        base_url: &str,
        service_name: &str,
        delta: &str,
    ) -> Result<u32, ConsulError> {
        let delta: ScaleDelta = delta.parse()?;
        let stored = self
            .get_raw(&ServiceKey::Scale.url(base_url, service_name))
            .await?;

        let scale = scale::resolve_scale(stored.as_deref(), delta);
        debug!(service = service_name, ?delta, scale, "Calculated scale");
        Ok(scale)
    }

    async fn get_color(&self, base_url: &str, service_name: &str) -> Result<String, ConsulError> {
        let stored = self
            .get_raw(&ServiceKey::Color.url(base_url, service_name))
            .await?;

        Ok(color::resolve_color(stored.as_deref()))
    }

    async fn put_scale(
        &self,
        base_url: &str,
        service_name: &str,
        value: u32,
    ) -> Result<String, ConsulError> {
        self.put_raw(
            ServiceKey::Scale.url(base_url, service_name),
            value.to_string(),
        )
        .await
    }

    async fn put_color(
        &self,
        base_url: &str,
        service_name: &str,
        value: &str,
    ) -> Result<String, ConsulError> {
        self.put_raw(
            ServiceKey::Color.url(base_url, service_name),
            value.to_string(),
        )
        .await
    }
}

/// In-memory Consul client (testing)
pub struct MockConsulClient {
    values: Arc<Mutex<HashMap<String, String>>>,
    put_response: String,
    unreachable: bool,
}

impl MockConsulClient {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            put_response: "true".to_string(),
            unreachable: false,
        }
    }

    /// Seed a stored value
    pub async fn with_value(self, service_name: &str, key: ServiceKey, value: &str) -> Self {
        self.values
            .lock()
            .await
            .insert(key.path(service_name), value.to_string());
        self
    }

    /// Body returned from every PUT
    pub fn with_put_response(mut self, response: &str) -> Self {
        self.put_response = response.to_string();
        self
    }

    /// Fail every call as if the store could not be reached
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Current stored value, for assertions
    pub async fn value(&self, service_name: &str, key: ServiceKey) -> Option<String> {
        self.values.lock().await.get(&key.path(service_name)).cloned()
    }

    fn check_reachable(&self, base_url: &str) -> Result<(), ConsulError> {
        if self.unreachable {
            return Err(ConsulError::UnexpectedStatus {
                url: base_url.to_string(),
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            });
        }
        Ok(())
    }

    async fn put(
        &self,
        base_url: &str,
        service_name: &str,
        key: ServiceKey,
        value: String,
    ) -> Result<String, ConsulError> {
        self.check_reachable(base_url)?;
        self.values.lock().await.insert(key.path(service_name), value);
        Ok(self.put_response.clone())
    }
}

impl ConsulClient for MockConsulClient {
    async fn get_scale_calc(
        &self,
        base_url: &str,
        service_name: &str,
        delta: &str,
    ) -> Result<u32, ConsulError> {
        let delta: ScaleDelta = delta.parse()?;
        self.check_reachable(base_url)?;

        let stored = self.value(service_name, ServiceKey::Scale).await;
        Ok(scale::resolve_scale(stored.as_deref(), delta))
    }

    async fn get_color(&self, base_url: &str, service_name: &str) -> Result<String, ConsulError> {
        self.check_reachable(base_url)?;

        let stored = self.value(service_name, ServiceKey::Color).await;
        Ok(color::resolve_color(stored.as_deref()))
    }

    async fn put_scale(
        &self,
        base_url: &str,
        service_name: &str,
        value: u32,
    ) -> Result<String, ConsulError> {
        self.put(base_url, service_name, ServiceKey::Scale, value.to_string())
            .await
    }

    async fn put_color(
        &self,
        base_url: &str,
        service_name: &str,
        value: &str,
    ) -> Result<String, ConsulError> {
        self.put(base_url, service_name, ServiceKey::Color, value.to_string())
            .await
    }
}

impl Default for MockConsulClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

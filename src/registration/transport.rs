use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::RequestMode;

use super::fields::RegistrationFields;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request could not be delivered: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for TransportError {
    fn from(e: gloo_net::Error) -> Self {
        TransportError::Network(e.to_string())
    }
}

/// Delivers a registration to the intake service. `Ok` only means the
/// request went out and came back; the service's verdict is not visible.
#[async_trait(?Send)]
pub trait RegistrationTransport {
    async fn deliver(&self, fields: &RegistrationFields) -> Result<(), TransportError>;
}

/// POSTs the form to the third-party intake endpoint in `no-cors` mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormIntakeTransport {
    endpoint: String,
}

impl FormIntakeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FormIntakeTransport {
    fn default() -> Self {
        Self::new(config::get_registration_endpoint())
    }
}

#[async_trait(?Send)]
impl RegistrationTransport for FormIntakeTransport {
    async fn deliver(&self, fields: &RegistrationFields) -> Result<(), TransportError> {
        let body = fields.to_urlencoded();
        debug!("Posting registration to {}", self.endpoint());
        // The response is opaque under no-cors; status and body are ignored.
        Request::post(self.endpoint())
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(JsValue::from_str(&body))
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_configured_endpoint() {
        assert_eq!(
            FormIntakeTransport::default().endpoint(),
            config::get_registration_endpoint()
        );
    }

    #[test]
    fn network_error_keeps_detail_for_logs() {
        let e = TransportError::Network("offline".to_string());
        assert_eq!(e.to_string(), "request could not be delivered: offline");
    }
}

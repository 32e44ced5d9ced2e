use super::{Delivery, Transport};
use crate::errors::{AppError, AppResult};
use log::debug;
use std::time::Duration;

const USER_AGENT: &str = concat!("ridlereport/", env!("CARGO_PKG_VERSION"));

/// Posts `{"text": ...}` to an incoming-webhook endpoint.
pub struct WebhookTransport {
    url: String,
    timeout: Duration,
}

impl WebhookTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

pub fn payload(text: &str) -> String {
    serde_json::json!({ "text": text }).to_string()
}

impl Transport for WebhookTransport {
    fn send(&self, text: &str) -> AppResult<Delivery> {
        debug!("posting {} bytes to webhook", text.len());

        let result = ureq::post(&self.url)
            .timeout(self.timeout)
            .set("User-Agent", USER_AGENT)
            .set("Content-Type", "application/json")
            .send_string(&payload(text));

        match result {
            Ok(resp) if resp.status() == 200 => Ok(Delivery::Sent),
            Ok(resp) => {
                let status = resp.status();
                let body = resp.into_string().unwrap_or_default();
                Err(AppError::Transport(format!(
                    "Status Code: {status}, Response: {body}"
                )))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(AppError::Transport(format!(
                    "Status Code: {status}, Response: {body}"
                )))
            }
            Err(e) => Err(AppError::Transport(format!("connection failed: {e}"))),
        }
    }
}

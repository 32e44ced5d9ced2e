//! Outbound delivery of report messages.

pub mod webhook;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::thread;
use std::time::Duration;

pub use webhook::WebhookTransport;

/// Outcome of a send that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Skipped,
}

/// Something that accepts a text payload.
pub trait Transport {
    fn send(&self, text: &str) -> AppResult<Delivery>;
}

/// Used when no webhook endpoint is configured.
pub struct DisabledTransport;

impl Transport for DisabledTransport {
    fn send(&self, _text: &str) -> AppResult<Delivery> {
        warning("Webhook URL is not set. Skipping notification.");
        Ok(Delivery::Skipped)
    }
}

/// Prints messages instead of posting them (`--dry-run`).
pub struct ConsoleTransport;

impl Transport for ConsoleTransport {
    fn send(&self, text: &str) -> AppResult<Delivery> {
        println!("----- message -----\n{text}\n-------------------");
        Ok(Delivery::Sent)
    }
}

/// Pick the transport for this run.
pub fn from_config(cfg: &Config, dry_run: bool) -> Box<dyn Transport> {
    if dry_run {
        return Box::new(ConsoleTransport);
    }
    match (&cfg.webhook_url, cfg.transport_enabled) {
        (Some(url), true) => Box::new(WebhookTransport::new(
            url.trim(),
            Duration::from_secs(cfg.webhook_timeout_secs),
        )),
        _ => Box::new(DisabledTransport),
    }
}

/// Send one message; failures are reported, never propagated.
pub fn deliver(transport: &dyn Transport, text: &str) -> bool {
    match transport.send(text) {
        Ok(Delivery::Sent) => {
            success("Message delivered.");
            true
        }
        Ok(Delivery::Skipped) => false,
        Err(e) => {
            error(format!("Error sending message. {e}"));
            false
        }
    }
}

/// Send messages in order with a fixed pause between them. Returns how many were sent.
pub fn deliver_all(transport: &dyn Transport, messages: &[String], delay: Duration) -> usize {
    let mut delivered = 0;
    for (i, msg) in messages.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        if deliver(transport, msg) {
            delivered += 1;
        }
    }
    delivered
}

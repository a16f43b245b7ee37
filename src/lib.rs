//! Typed Rust client for the Zenziva SMS and WhatsApp HTTP API.
//!
//! The crate is split the usual way: a domain layer of strong types (configuration,
//! service types, endpoint resolution), a transport layer for wire-format quirks
//! (form field names, a `messageId` that arrives as text or as a number), and a small
//! client layer orchestrating the single HTTP round trip.
//!
//! ```rust,no_run
//! use zenziva::{ClientConfig, ZenzivaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zenziva::ZenzivaError> {
//!     let config = ClientConfig::new("userkey", "passkey")
//!         .with_service_type("sms_center")
//!         .with_subdomain("acme");
//!     let client = ZenzivaClient::new(config)?;
//!     let result = client.simple_send("08123456789", "hello").await?;
//!     println!("message {} success={}", result.message_id, result.success);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{MessageBuilder, ZenzivaClient, ZenzivaClientBuilder, ZenzivaError};
pub use domain::{
    ClientConfig, Endpoint, Gateway, OutgoingMessage, Password, SendResult, ServiceType,
    Subdomain, Username, ValidatedConfig, ValidationError,
};

//! Domain layer: strong types with validation and invariants (no I/O).

mod config;
mod endpoint;
mod request;
mod response;
mod validation;
mod value;

pub use config::{ClientConfig, ValidatedConfig};
pub use endpoint::{DEFAULT_BASE_DOMAIN, Endpoint, Gateway, SCHEME};
pub use request::OutgoingMessage;
pub use response::SendResult;
pub use validation::ValidationError;
pub use value::{Password, ServiceType, Subdomain, Username};

pub(crate) use value::parse_domain;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_config_resolves_endpoint_per_message() {
        let config = ClientConfig::new("user", "pass")
            .with_service_type("sms_center")
            .with_subdomain("acme")
            .validate()
            .unwrap();

        let plain = OutgoingMessage::new("0812", "hello");
        let otp = OutgoingMessage::new("0812", "123456").with_otp(true);

        assert_eq!(
            config
                .gateway()
                .endpoint(plain.otp())
                .url(DEFAULT_BASE_DOMAIN),
            "https://acme.zenziva.net/api/sendsms/"
        );
        assert_eq!(
            config.gateway().endpoint(otp.otp()).url(DEFAULT_BASE_DOMAIN),
            "https://acme.zenziva.net/api/sendOTP/"
        );
    }

    #[test]
    fn outgoing_message_defaults_to_non_otp() {
        let message = OutgoingMessage::new("0812", "hello");
        assert_eq!(message.to(), "0812");
        assert_eq!(message.text(), "hello");
        assert!(!message.otp());
    }
}

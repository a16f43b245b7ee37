use std::fmt;

use serde::Deserialize;

use crate::domain::endpoint::Gateway;
use crate::domain::validation::ValidationError;
use crate::domain::value::{Password, ServiceType, Subdomain, Username};

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
/// Raw account configuration as supplied by the caller.
///
/// Nothing is checked until [`ClientConfig::validate`]; this keeps the type usable as a
/// deserialization target for config files. `type` is accepted as an alias of
/// `service_type`.
pub struct ClientConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub subdomain: Option<String>,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            service_type: None,
            subdomain: None,
        }
    }

    /// Set the service type by name (see [`ServiceType`] for accepted names).
    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    /// Set the subdomain used by `sms_center` and `whatsapp_center`.
    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Check the configuration and resolve defaults. Performs no I/O.
    ///
    /// Checks run in order: username, password, service type (blank or unset means
    /// `regular`), then the subdomain when the service type requires one.
    pub fn validate(&self) -> Result<ValidatedConfig, ValidationError> {
        let username = Username::new(self.username.as_str())?;
        let password = Password::new(self.password.as_str())?;

        let service_type = match self.service_type.as_deref() {
            None => ServiceType::default(),
            Some(value) if value.trim().is_empty() => ServiceType::default(),
            Some(value) => value.parse()?,
        };

        let subdomain = match self.subdomain.as_deref() {
            Some(value) if service_type.requires_subdomain() && !value.trim().is_empty() => {
                Some(Subdomain::new(value)?)
            }
            _ => None,
        };
        let gateway = match (service_type, subdomain) {
            (ServiceType::Regular, _) => Gateway::Regular,
            (ServiceType::Masking, _) => Gateway::Masking,
            (ServiceType::WhatsappRegular, _) => Gateway::WhatsappRegular,
            (ServiceType::SmsCenter, Some(subdomain)) => Gateway::SmsCenter(subdomain),
            (ServiceType::WhatsappCenter, Some(subdomain)) => Gateway::WhatsappCenter(subdomain),
            (ServiceType::SmsCenter | ServiceType::WhatsappCenter, None) => {
                return Err(ValidationError::MissingSubdomain { service_type });
            }
        };

        Ok(ValidatedConfig {
            username,
            password,
            gateway,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("service_type", &self.service_type)
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration that passed [`ClientConfig::validate`].
pub struct ValidatedConfig {
    username: Username,
    password: Password,
    gateway: Gateway,
}

impl ValidatedConfig {
    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn service_type(&self) -> ServiceType {
        self.gateway.service_type()
    }
}

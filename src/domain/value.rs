use std::fmt;
use std::str::FromStr;

use crate::domain::endpoint::DEFAULT_BASE_DOMAIN;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Zenziva account user key (sent as `userkey`).
///
/// Invariant: must not be empty. The value is sent exactly as given.
pub struct Username(String);

impl Username {
    /// Form field name used by Zenziva (`userkey`).
    pub const FIELD: &'static str = "userkey";
    /// Name reported in [`ValidationError::MissingCredential`].
    pub const NAME: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::MissingCredential { field: Self::NAME });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Zenziva account pass key (sent as `passkey`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by Zenziva (`passkey`).
    pub const FIELD: &'static str = "passkey";
    /// Name reported in [`ValidationError::MissingCredential`].
    pub const NAME: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::MissingCredential { field: Self::NAME });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vendor-assigned routing prefix, e.g. `acme` in `acme.zenziva.net`.
///
/// Invariant: forms a valid host name when prefixed to the Zenziva domain, stored in
/// its normalized lowercase form. Numeric labels such as `12345` are allowed.
pub struct Subdomain(String);

impl Subdomain {
    /// Create a validated [`Subdomain`].
    ///
    /// Blank input is reported as [`ValidationError::InvalidSubdomain`]; callers that treat an
    /// empty subdomain as "not configured" should filter it out before calling this.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let parsed = parse_subdomain(value.trim());
        match parsed {
            Some(domain) => Ok(Self(domain)),
            None => Err(ValidationError::InvalidSubdomain { value }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses `input` as the leading labels of a host under the Zenziva domain.
///
/// The composed host is parsed rather than `input` alone, so a numeric last label
/// is not mistaken for an IPv4 address.
fn parse_subdomain(input: &str) -> Option<String> {
    if has_empty_label(input) {
        return None;
    }
    let suffix = format!(".{DEFAULT_BASE_DOMAIN}");
    match url::Host::parse(&format!("{input}{suffix}")).ok()? {
        url::Host::Domain(host) if !host.contains("..") => {
            host.strip_suffix(&suffix).map(str::to_owned)
        }
        _ => None,
    }
}

/// Parses `input` as a DNS domain, rejecting IP literals and empty labels.
pub(crate) fn parse_domain(input: &str) -> Option<String> {
    if has_empty_label(input) {
        return None;
    }
    match url::Host::parse(input).ok()? {
        url::Host::Domain(domain) if !domain.contains("..") => Some(domain),
        _ => None,
    }
}

fn has_empty_label(input: &str) -> bool {
    input.is_empty() || input.starts_with('.') || input.ends_with('.') || input.contains("..")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Zenziva product the account is subscribed to.
///
/// Selects both the host (subdomain) and the API path used for sending.
pub enum ServiceType {
    /// Regular SMS via `gsm.zenziva.net`.
    #[default]
    Regular,
    /// Masking (branded sender) SMS via `masking.zenziva.net`.
    Masking,
    /// Dedicated SMS center on an account-specific subdomain.
    SmsCenter,
    /// Regular WhatsApp via `gsm.zenziva.net`.
    WhatsappRegular,
    /// Dedicated WhatsApp center on an account-specific subdomain.
    WhatsappCenter,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Regular,
        ServiceType::Masking,
        ServiceType::SmsCenter,
        ServiceType::WhatsappRegular,
        ServiceType::WhatsappCenter,
    ];

    /// Canonical configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Masking => "masking",
            Self::SmsCenter => "sms_center",
            Self::WhatsappRegular => "whatsapp_regular",
            Self::WhatsappCenter => "whatsapp_center",
        }
    }

    /// Whether the caller must configure a subdomain for this service type.
    pub fn requires_subdomain(self) -> bool {
        matches!(self, Self::SmsCenter | Self::WhatsappCenter)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    /// Accepts the canonical names plus Zenziva's own `reguler` spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "regular" | "reguler" => Ok(Self::Regular),
            "masking" => Ok(Self::Masking),
            "sms_center" => Ok(Self::SmsCenter),
            "whatsapp_regular" | "whatsapp_reguler" => Ok(Self::WhatsappRegular),
            "whatsapp_center" => Ok(Self::WhatsappCenter),
            _ => Err(ValidationError::InvalidServiceType {
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_reject_empty() {
        assert_eq!(
            Username::new("").unwrap_err(),
            ValidationError::MissingCredential { field: "username" }
        );
        assert_eq!(
            Password::new("").unwrap_err(),
            ValidationError::MissingCredential { field: "password" }
        );
        assert_eq!(Username::new(" user ").unwrap().as_str(), " user ");
        assert_eq!(Username::new("   ").unwrap().as_str(), "   ");
        assert_eq!(Password::new(" pass ").unwrap().as_str(), " pass ");
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("secret").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn subdomain_is_normalized_and_validated() {
        assert_eq!(Subdomain::new(" AcMe ").unwrap().as_str(), "acme");
        assert_eq!(Subdomain::new("eu.acme").unwrap().as_str(), "eu.acme");
        assert!(Subdomain::new("a b").is_err());
        assert!(Subdomain::new("acme/api").is_err());
        assert!(Subdomain::new("").is_err());
        assert!(Subdomain::new(".acme").is_err());
        assert!(Subdomain::new("acme..eu").is_err());
    }

    #[test]
    fn subdomain_accepts_numeric_labels() {
        assert_eq!(Subdomain::new("12345").unwrap().as_str(), "12345");
        assert_eq!(Subdomain::new("acme.01").unwrap().as_str(), "acme.01");
        assert_eq!(Subdomain::new("0x1f").unwrap().as_str(), "0x1f");
        assert_eq!(Subdomain::new("acme_sms").unwrap().as_str(), "acme_sms");
    }

    #[test]
    fn parse_domain_rejects_ip_literals() {
        assert_eq!(parse_domain("Zenziva.NET").as_deref(), Some("zenziva.net"));
        assert_eq!(parse_domain("127.0.0.1"), None);
        assert_eq!(parse_domain("example.01"), None);
    }

    #[test]
    fn service_type_parses_canonical_names_and_aliases() {
        for service_type in ServiceType::ALL {
            assert_eq!(service_type.as_str().parse::<ServiceType>(), Ok(service_type));
        }
        assert_eq!("reguler".parse::<ServiceType>(), Ok(ServiceType::Regular));
        assert_eq!(
            "whatsapp_reguler".parse::<ServiceType>(),
            Ok(ServiceType::WhatsappRegular)
        );
        assert_eq!(
            "invalid_type".parse::<ServiceType>(),
            Err(ValidationError::InvalidServiceType {
                value: "invalid_type".to_owned()
            })
        );
    }

    #[test]
    fn only_center_types_require_subdomain() {
        let requiring = ServiceType::ALL
            .into_iter()
            .filter(|it| it.requires_subdomain())
            .collect::<Vec<_>>();
        assert_eq!(
            requiring,
            vec![ServiceType::SmsCenter, ServiceType::WhatsappCenter]
        );
        assert_eq!(ServiceType::default(), ServiceType::Regular);
    }
}

use std::fmt;

use crate::domain::value::ServiceType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCredential { field: &'static str },
    InvalidServiceType { value: String },
    MissingSubdomain { service_type: ServiceType },
    InvalidSubdomain { value: String },
    InvalidBaseDomain { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential { field } => write!(f, "{field} is required"),
            Self::InvalidServiceType { value } => {
                let allowed = ServiceType::ALL
                    .iter()
                    .map(|it| it.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "invalid service type `{value}`; expected one of ({allowed})"
                )
            }
            Self::MissingSubdomain { service_type } => {
                write!(f, "subdomain is required for service type {service_type}")
            }
            Self::InvalidSubdomain { value } => write!(f, "invalid subdomain: {value}"),
            Self::InvalidBaseDomain { value } => write!(f, "invalid base domain: {value}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::domain::ServiceType;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::MissingCredential { field: "username" };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::InvalidServiceType {
            value: "invalid_type".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid service type `invalid_type`; expected one of \
             (regular, masking, sms_center, whatsapp_regular, whatsapp_center)"
        );

        let err = ValidationError::MissingSubdomain {
            service_type: ServiceType::WhatsappCenter,
        };
        assert_eq!(
            err.to_string(),
            "subdomain is required for service type whatsapp_center"
        );

        let err = ValidationError::InvalidSubdomain {
            value: "a b".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid subdomain: a b");

        let err = ValidationError::InvalidBaseDomain {
            value: "a/b".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid base domain: a/b");
    }
}

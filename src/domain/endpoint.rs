use crate::domain::value::{ServiceType, Subdomain};

pub const SCHEME: &str = "https";
pub const DEFAULT_BASE_DOMAIN: &str = "zenziva.net";

const GSM_SUBDOMAIN: &str = "gsm";
const MASKING_SUBDOMAIN: &str = "masking";

const SEND_SMS_PATH: &str = "api/sendsms/";
const SEND_OTP_PATH: &str = "api/sendOTP/";
const SEND_WA_PATH: &str = "api/sendWA/";
const SEND_WA_CENTER_PATH: &str = "api/WAsendMsg/";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated routing target: the service type together with the subdomain it needs.
///
/// Center products carry the caller's subdomain; the others are routed to fixed
/// vendor hosts, so a configured subdomain is ignored for them.
pub enum Gateway {
    Regular,
    Masking,
    SmsCenter(Subdomain),
    WhatsappRegular,
    WhatsappCenter(Subdomain),
}

impl Gateway {
    pub fn service_type(&self) -> ServiceType {
        match self {
            Self::Regular => ServiceType::Regular,
            Self::Masking => ServiceType::Masking,
            Self::SmsCenter(_) => ServiceType::SmsCenter,
            Self::WhatsappRegular => ServiceType::WhatsappRegular,
            Self::WhatsappCenter(_) => ServiceType::WhatsappCenter,
        }
    }

    /// Resolve the send endpoint. `otp` only matters for the SMS products.
    pub fn endpoint(&self, otp: bool) -> Endpoint<'_> {
        let sms_path = if otp { SEND_OTP_PATH } else { SEND_SMS_PATH };
        let (subdomain, path) = match self {
            Self::Regular => (GSM_SUBDOMAIN, sms_path),
            Self::Masking => (MASKING_SUBDOMAIN, sms_path),
            Self::SmsCenter(subdomain) => (subdomain.as_str(), sms_path),
            Self::WhatsappRegular => (GSM_SUBDOMAIN, SEND_WA_PATH),
            Self::WhatsappCenter(subdomain) => (subdomain.as_str(), SEND_WA_CENTER_PATH),
        };
        Endpoint { subdomain, path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    subdomain: &'a str,
    path: &'static str,
}

impl Endpoint<'_> {
    pub fn subdomain(&self) -> &str {
        self.subdomain
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Host name under `base_domain`, e.g. `gsm.zenziva.net`.
    pub fn host(&self, base_domain: &str) -> String {
        format!("{}.{base_domain}", self.subdomain)
    }

    /// Full URL under `base_domain`, e.g. `https://gsm.zenziva.net/api/sendsms/`.
    pub fn url(&self, base_domain: &str) -> String {
        format!("{SCHEME}://{}/{}", self.host(base_domain), self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(gateway: &Gateway, otp: bool) -> String {
        gateway.endpoint(otp).url(DEFAULT_BASE_DOMAIN)
    }

    #[test]
    fn regular_routes_to_gsm() {
        let gateway = Gateway::Regular;
        assert_eq!(url(&gateway, false), "https://gsm.zenziva.net/api/sendsms/");
        assert_eq!(url(&gateway, true), "https://gsm.zenziva.net/api/sendOTP/");
    }

    #[test]
    fn masking_routes_to_masking() {
        let gateway = Gateway::Masking;
        assert_eq!(
            url(&gateway, false),
            "https://masking.zenziva.net/api/sendsms/"
        );
        assert_eq!(url(&gateway, true), "https://masking.zenziva.net/api/sendOTP/");
    }

    #[test]
    fn sms_center_uses_configured_subdomain() {
        let gateway = Gateway::SmsCenter(Subdomain::new("acme").unwrap());
        assert_eq!(url(&gateway, false), "https://acme.zenziva.net/api/sendsms/");
        assert_eq!(url(&gateway, true), "https://acme.zenziva.net/api/sendOTP/");
    }

    #[test]
    fn whatsapp_regular_ignores_otp() {
        let gateway = Gateway::WhatsappRegular;
        assert_eq!(url(&gateway, false), "https://gsm.zenziva.net/api/sendWA/");
        assert_eq!(url(&gateway, true), "https://gsm.zenziva.net/api/sendWA/");
    }

    #[test]
    fn whatsapp_center_ignores_otp() {
        let gateway = Gateway::WhatsappCenter(Subdomain::new("acme").unwrap());
        assert_eq!(
            url(&gateway, false),
            "https://acme.zenziva.net/api/WAsendMsg/"
        );
        assert_eq!(url(&gateway, true), "https://acme.zenziva.net/api/WAsendMsg/");
    }

    #[test]
    fn endpoint_honours_base_domain_override() {
        let endpoint = Gateway::Regular.endpoint(false);
        assert_eq!(endpoint.subdomain(), "gsm");
        assert_eq!(endpoint.path(), "api/sendsms/");
        assert_eq!(endpoint.host("staging.example"), "gsm.staging.example");
        assert_eq!(
            endpoint.url("staging.example"),
            "https://gsm.staging.example/api/sendsms/"
        );
    }

    #[test]
    fn gateway_reports_its_service_type() {
        let acme = Subdomain::new("acme").unwrap();
        let gateways = [
            Gateway::Regular,
            Gateway::Masking,
            Gateway::SmsCenter(acme.clone()),
            Gateway::WhatsappRegular,
            Gateway::WhatsappCenter(acme),
        ];
        let types = gateways
            .iter()
            .map(Gateway::service_type)
            .collect::<Vec<_>>();
        assert_eq!(types, ServiceType::ALL.to_vec());
    }
}

//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::{
    ClientConfig, DEFAULT_BASE_DOMAIN, OutgoingMessage, SendResult, ValidatedConfig,
    ValidationError,
};
use crate::transport::DecodeError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // `form` sets `Content-Type: application/x-www-form-urlencoded`.
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ZenzivaClient`].
///
/// Validation errors are raised before any request is made. Every other variant
/// aborts the send; nothing is retried and no partial result is returned.
pub enum ZenzivaError {
    /// The client configuration is incomplete or invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not valid JSON.
    #[error("response parse error: {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// `messageId` is missing, non-numeric text, or neither text nor a number.
    #[error("malformed messageId: {}", .value.as_deref().unwrap_or("<missing>"))]
    MalformedMessageId { value: Option<String> },

    /// A required response field is missing or has the wrong type.
    #[error("malformed response: missing or invalid `{field}`")]
    MalformedResponse { field: &'static str },
}

impl ZenzivaError {
    fn from_decode(err: DecodeError) -> Self {
        match err {
            DecodeError::Json(err) => Self::ResponseParse(err),
            DecodeError::MalformedMessageId { value } => Self::MalformedMessageId { value },
            DecodeError::MalformedResponse { field } => Self::MalformedResponse { field },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ZenzivaClient`].
///
/// Use this when you need to customize the base domain, timeout, or user-agent.
pub struct ZenzivaClientBuilder {
    config: ClientConfig,
    base_domain: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ZenzivaClientBuilder {
    /// Create a builder with the default base domain and no timeout/user-agent override.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            base_domain: DEFAULT_BASE_DOMAIN.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the service type by name, e.g. `sms_center`.
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.config.service_type = Some(service_type.into());
        self
    }

    /// Set the subdomain for `sms_center` / `whatsapp_center` accounts.
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.config.subdomain = Some(subdomain.into());
        self
    }

    /// Override the domain that service subdomains live under (`zenziva.net`).
    pub fn base_domain(mut self, base_domain: impl Into<String>) -> Self {
        self.base_domain = base_domain.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and build a [`ZenzivaClient`].
    pub fn build(self) -> Result<ZenzivaClient, ZenzivaError> {
        let config = self.config.validate()?;
        let base_domain = crate::domain::parse_domain(self.base_domain.trim())
            .ok_or_else(|| ValidationError::InvalidBaseDomain {
                value: self.base_domain.clone(),
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ZenzivaError::Transport(Box::new(err)))?;

        Ok(ZenzivaClient {
            config: Arc::new(config),
            base_domain,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Zenziva client.
///
/// Holds an immutable, validated configuration; every send builds its own
/// [`OutgoingMessage`], so one client can be shared across tasks.
///
/// ```rust,no_run
/// use zenziva::{ClientConfig, ZenzivaClient};
///
/// # async fn run() -> Result<(), zenziva::ZenzivaError> {
/// let client = ZenzivaClient::new(ClientConfig::new("userkey", "passkey"))?;
/// let result = client
///     .compose()
///     .to("08123456789")
///     .message("Your code is 123456")
///     .otp(true)
///     .send()
///     .await?;
/// println!("sent {} (success: {})", result.message_id, result.success);
/// # Ok(())
/// # }
/// ```
pub struct ZenzivaClient {
    config: Arc<ValidatedConfig>,
    base_domain: String,
    http: Arc<dyn HttpTransport>,
}

impl ZenzivaClient {
    /// Validate `config` and create a client with default HTTP settings.
    ///
    /// For more customization, use [`ZenzivaClient::builder`].
    pub fn new(config: ClientConfig) -> Result<Self, ZenzivaError> {
        Self::builder(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> ZenzivaClientBuilder {
        ZenzivaClientBuilder::new(config)
    }

    /// Validated configuration this client sends with.
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Start a fluent message chain: `compose().to(..).message(..).otp(..).send()`.
    pub fn compose(&self) -> MessageBuilder<'_> {
        MessageBuilder {
            client: self,
            message: OutgoingMessage::default(),
        }
    }

    /// Send `message` with a single form POST and normalize the reply.
    ///
    /// Errors:
    /// - [`ZenzivaError::Transport`] for connection failures and timeouts,
    /// - [`ZenzivaError::HttpStatus`] for non-2xx HTTP responses whose body is not a
    ///   gateway reply (a decodable body is returned as a [`SendResult`] regardless of
    ///   the HTTP status),
    /// - [`ZenzivaError::ResponseParse`], [`ZenzivaError::MalformedMessageId`] and
    ///   [`ZenzivaError::MalformedResponse`] when the reply cannot be normalized.
    pub async fn send(&self, message: &OutgoingMessage) -> Result<SendResult, ZenzivaError> {
        let endpoint = self.config.gateway().endpoint(message.otp());
        let url = endpoint.url(&self.base_domain);
        debug!(
            service_type = %self.config.service_type(),
            host = %endpoint.host(&self.base_domain),
            path = endpoint.path(),
            otp = message.otp(),
            "sending message"
        );

        let params = crate::transport::encode_send_form(&self.config, message);
        let response = self
            .http
            .post_form(&url, params)
            .await
            .map_err(ZenzivaError::Transport)?;

        let decoded = crate::transport::decode_send_json_response(&response.body);
        let result = match decoded {
            Ok(result) => result,
            Err(_) if !(200..=299).contains(&response.status) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                return Err(ZenzivaError::HttpStatus {
                    status: response.status,
                    body,
                });
            }
            Err(err) => return Err(ZenzivaError::from_decode(err)),
        };
        debug!(
            message_id = result.message_id,
            success = result.success,
            http_status = response.status,
            "message response decoded"
        );
        Ok(result)
    }

    /// Shorthand for `compose().to(to).message(message).send()`.
    pub async fn simple_send(
        &self,
        to: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<SendResult, ZenzivaError> {
        self.compose().to(to).message(message).send().await
    }

    /// Shorthand for `compose().to(to).message(message).otp(otp).send()`.
    pub async fn simple_send_otp(
        &self,
        to: impl Into<String>,
        message: impl Into<String>,
        otp: bool,
    ) -> Result<SendResult, ZenzivaError> {
        self.compose().to(to).message(message).otp(otp).send().await
    }
}

#[derive(Clone)]
/// Fluent message chain started by [`ZenzivaClient::compose`].
pub struct MessageBuilder<'a> {
    client: &'a ZenzivaClient,
    message: OutgoingMessage,
}

impl MessageBuilder<'_> {
    /// Set the recipient phone number.
    pub fn to(mut self, phone: impl Into<String>) -> Self {
        self.message.set_to(phone.into());
        self
    }

    /// Set the message text.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message.set_text(text.into());
        self
    }

    /// Mark the message as a one-time password.
    pub fn otp(mut self, otp: bool) -> Self {
        self.message = self.message.with_otp(otp);
        self
    }

    /// Finish the chain without sending.
    pub fn build(self) -> OutgoingMessage {
        self.message
    }

    /// Send the message through the client that started the chain.
    pub async fn send(self) -> Result<SendResult, ZenzivaError> {
        self.client.send(&self.message).await
    }
}

use serde_json::{Map, Number, Value};

use crate::domain::{OutgoingMessage, Password, SendResult, Username, ValidatedConfig};

const TO_FIELD: &str = "nohp";
const MESSAGE_FIELD: &str = "pesan";

const MESSAGE_ID_KEY: &str = "messageId";
const TO_KEY: &str = "to";
const STATUS_KEY: &str = "status";
const TEXT_KEY: &str = "text";
const ROOT: &str = "<root>";

const SUCCESS_STATUS: &str = "1";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed messageId: {}", .value.as_deref().unwrap_or("<missing>"))]
    MalformedMessageId { value: Option<String> },

    #[error("malformed response: missing or invalid `{field}`")]
    MalformedResponse { field: &'static str },
}

/// A single response field, as Zenziva actually sends it.
#[derive(Debug, Clone, PartialEq)]
enum WireField {
    Missing,
    Text(String),
    Number(Number),
    Other(Value),
}

impl WireField {
    fn take(object: &mut Map<String, Value>, key: &str) -> Self {
        match object.remove(key) {
            None => Self::Missing,
            Some(Value::String(text)) => Self::Text(text),
            Some(Value::Number(number)) => Self::Number(number),
            Some(other) => Self::Other(other),
        }
    }
}

pub fn encode_send_form(
    config: &ValidatedConfig,
    message: &OutgoingMessage,
) -> Vec<(String, String)> {
    vec![
        (
            Username::FIELD.to_owned(),
            config.username().as_str().to_owned(),
        ),
        (
            Password::FIELD.to_owned(),
            config.password().as_str().to_owned(),
        ),
        (TO_FIELD.to_owned(), message.to().to_owned()),
        (MESSAGE_FIELD.to_owned(), message.text().to_owned()),
    ]
}

pub fn decode_send_json_response(json: &str) -> Result<SendResult, DecodeError> {
    let Value::Object(mut object) = serde_json::from_str::<Value>(json)? else {
        return Err(DecodeError::MalformedResponse { field: ROOT });
    };

    let message_id = normalize_message_id(WireField::take(&mut object, MESSAGE_ID_KEY))?;
    let to = required_text(WireField::take(&mut object, TO_KEY), TO_KEY)?;
    let success = matches!(
        WireField::take(&mut object, STATUS_KEY),
        WireField::Text(status) if status == SUCCESS_STATUS
    );
    let message = required_text(WireField::take(&mut object, TEXT_KEY), TEXT_KEY)?;

    Ok(SendResult {
        message_id,
        to,
        success,
        message,
    })
}

/// Textual ids are parsed (blank means `0`); numeric ids are truncated.
fn normalize_message_id(field: WireField) -> Result<i64, DecodeError> {
    match field {
        WireField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| DecodeError::MalformedMessageId { value: Some(text) })
        }
        WireField::Number(number) => {
            if let Some(id) = number.as_i64() {
                return Ok(id);
            }
            match number.as_f64() {
                Some(id) if id.is_finite() && id >= i64::MIN as f64 && id < i64::MAX as f64 => {
                    Ok(id.trunc() as i64)
                }
                _ => Err(DecodeError::MalformedMessageId {
                    value: Some(number.to_string()),
                }),
            }
        }
        WireField::Other(value) => Err(DecodeError::MalformedMessageId {
            value: Some(value.to_string()),
        }),
        WireField::Missing => Err(DecodeError::MalformedMessageId { value: None }),
    }
}

fn required_text(field: WireField, name: &'static str) -> Result<String, DecodeError> {
    match field {
        WireField::Text(text) => Ok(text),
        WireField::Missing | WireField::Number(_) | WireField::Other(_) => {
            Err(DecodeError::MalformedResponse { field: name })
        }
    }
}

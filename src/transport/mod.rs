//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_message;

pub use send_message::{DecodeError, decode_send_json_response, encode_send_form};

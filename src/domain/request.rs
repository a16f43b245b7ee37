#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One message to send, built fresh for every send.
///
/// Recipient and text are passed to Zenziva as-is; neither phone number format nor
/// message encoding is checked here.
pub struct OutgoingMessage {
    to: String,
    text: String,
    otp: bool,
}

impl OutgoingMessage {
    pub fn new(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            otp: false,
        }
    }

    /// Mark the message as a one-time password. Only affects endpoint selection.
    pub fn with_otp(mut self, otp: bool) -> Self {
        self.otp = otp;
        self
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn otp(&self) -> bool {
        self.otp
    }

    pub(crate) fn set_to(&mut self, to: String) {
        self.to = to;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

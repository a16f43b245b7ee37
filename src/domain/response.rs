#[derive(Debug, Clone, PartialEq, Eq)]
/// Normalized reply to a send request.
pub struct SendResult {
    /// Zenziva message id; `0` when the gateway returned an empty id.
    pub message_id: i64,
    /// Recipient as echoed back by the gateway.
    pub to: String,
    /// `true` only when the gateway reported `status == "1"`.
    pub success: bool,
    /// Human-readable status text from the gateway.
    pub message: String,
}

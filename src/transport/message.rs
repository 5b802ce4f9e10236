use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{MessageDetails, MessageId};

pub const MESSAGE_PATH: &str = "/sms/message";

#[derive(Debug, Clone, Deserialize)]
struct MessageDetailsJson {
    #[serde(rename = "Method", default)]
    method: Option<String>,
    #[serde(rename = "To", default)]
    to: Option<TransportScalar>,
    #[serde(rename = "Originator", default)]
    originator: Option<String>,
    #[serde(rename = "Text", default)]
    text: Option<String>,
    #[serde(rename = "Sent Date", default)]
    sent_date: Option<String>,
    #[serde(rename = "Message Status", default)]
    status: Option<String>,
    #[serde(rename = "Delivered Date", default)]
    delivered_date: Option<String>,
    #[serde(rename = "DlrCode", default)]
    dlr_code: Option<TransportScalar>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "Reference", default)]
    reference: Option<String>,
    #[serde(rename = "Success")]
    success: bool,
}

/// Path for a single message. The id is interpolated without escaping.
pub fn message_path(id: &MessageId) -> String {
    format!("{MESSAGE_PATH}/{}", id.as_str())
}

pub fn decode_message_details_json_response(
    body: &[u8],
) -> Result<Vec<MessageDetails>, TransportError> {
    let parsed: Vec<MessageDetailsJson> = serde_json::from_slice(body)?;
    Ok(parsed
        .into_iter()
        .map(|value| MessageDetails {
            method: value.method.unwrap_or_default(),
            to: value
                .to
                .map(TransportScalar::into_string)
                .unwrap_or_default(),
            originator: value.originator.unwrap_or_default(),
            text: value.text.unwrap_or_default(),
            sent_date: value.sent_date.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
            delivered_date: value.delivered_date.unwrap_or_default(),
            dlr_code: value
                .dlr_code
                .map(TransportScalar::into_string)
                .unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            reference: value.reference.unwrap_or_default(),
            success: value.success,
        })
        .collect())
}

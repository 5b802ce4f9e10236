use serde::{Deserialize, Serialize};

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{CallbackUrl, OutgoingMessage, SendResult};

pub const SEND_PATH: &str = "/sms/message";

/// Wire shape of `POST /sms/message`. Every field is a JSON string; unset optionals are
/// sent as `""`.
#[derive(Debug, Serialize)]
struct SendMessageJsonBody<'a> {
    to: &'a str,
    from: &'a str,
    message: &'a str,
    valid: String,
    reference: &'a str,
    #[serde(rename = "callbackUrl")]
    callback_url: &'a str,
    scheduled: &'a str,
    coding: &'a str,
    udh: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct SendResultJson {
    success: bool,
    #[serde(default)]
    id: Option<TransportScalar>,
    #[serde(default)]
    description: Option<String>,
}

pub fn encode_send_message_body(message: &OutgoingMessage) -> Result<String, serde_json::Error> {
    let options = message.options();
    let body = SendMessageJsonBody {
        to: message.to().raw(),
        from: message.from().as_str(),
        message: message.message().as_str(),
        valid: options.valid.value().to_string(),
        reference: options.reference.as_deref().unwrap_or_default(),
        callback_url: options
            .callback_url
            .as_ref()
            .map(CallbackUrl::as_str)
            .unwrap_or_default(),
        scheduled: options.scheduled.as_deref().unwrap_or_default(),
        coding: options.coding.as_str(),
        udh: options.udh.as_deref().unwrap_or_default(),
    };
    serde_json::to_string(&body)
}

/// Decode the per-recipient results, preserving order and per-entry success flags.
pub fn decode_send_message_json_response(body: &[u8]) -> Result<Vec<SendResult>, TransportError> {
    let parsed: Vec<SendResultJson> = serde_json::from_slice(body)?;
    Ok(parsed
        .into_iter()
        .map(|value| SendResult {
            success: value.success,
            id: value.id.map(TransportScalar::into_string),
            description: value.description.unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{
        CallbackUrl, Coding, MessageOptions, MessageText, Originator, Recipient, ValidityMinutes,
    };

    use super::*;

    fn recipient() -> Recipient {
        Recipient::new("+64211234567")
    }

    #[test]
    fn encode_defaults_include_valid_and_coding() {
        let msg = OutgoingMessage::new(
            recipient(),
            Originator::new("TEST"),
            MessageText::new("hello"),
        );

        let body: Value = serde_json::from_str(&encode_send_message_body(&msg).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "to": "+64211234567",
                "from": "TEST",
                "message": "hello",
                "valid": "72",
                "reference": "",
                "callbackUrl": "",
                "scheduled": "",
                "coding": "1",
                "udh": ""
            })
        );
    }

    #[test]
    fn encode_explicit_options() {
        let options = MessageOptions {
            valid: ValidityMinutes::new(5).unwrap(),
            reference: Some("order-42".to_owned()),
            callback_url: Some(CallbackUrl::new("https://example.com/dlr").unwrap()),
            scheduled: Some("2024-01-02T10:00:00".to_owned()),
            coding: Coding::new("2").unwrap(),
            udh: Some("050003CC0201".to_owned()),
        };
        let msg = OutgoingMessage::with_options(
            recipient(),
            Originator::new("TEST"),
            MessageText::new("hello"),
            options,
        );

        let body: Value = serde_json::from_str(&encode_send_message_body(&msg).unwrap()).unwrap();
        assert_eq!(body["valid"], "5");
        assert_eq!(body["reference"], "order-42");
        assert_eq!(body["callbackUrl"], "https://example.com/dlr");
        assert_eq!(body["scheduled"], "2024-01-02T10:00:00");
        assert_eq!(body["coding"], "2");
        assert_eq!(body["udh"], "050003CC0201");
    }

    #[test]
    fn decode_keeps_order_and_mixed_success_flags() {
        let json = br#"
        [
          { "success": true, "id": "aaaaaaaa-0000-0000-0000-000000000001", "description": "" },
          { "success": false, "id": null, "description": "Invalid destination" }
        ]
        "#;

        let results = decode_send_message_json_response(json).unwrap();
        assert_eq!(
            results,
            vec![
                SendResult {
                    success: true,
                    id: Some("aaaaaaaa-0000-0000-0000-000000000001".to_owned()),
                    description: String::new(),
                },
                SendResult {
                    success: false,
                    id: None,
                    description: "Invalid destination".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn decode_rejects_malformed_body() {
        let err = decode_send_message_json_response(b"[{ not json").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}

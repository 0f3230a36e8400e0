use crate::error::RejectReason;
use axum::extract::ws::Utf8Bytes;
use serde_json::Value;
use vigil_core::{Role, SignalMessage};

/// A payload that passed validation.
///
/// `payload` is the exact text received; relays forward it as-is.
#[derive(Debug, Clone)]
pub struct AcceptedMessage {
    pub message: SignalMessage,
    pub payload: Utf8Bytes,
    pub classifies: Option<Role>,
}

/// Checks the shape of an inbound text frame.
///
/// Only `offer` and `answer` get field checks; every other type, including
/// `ice-candidate`, passes as long as it carries a non-empty string `type`.
pub fn validate(payload: Utf8Bytes) -> Result<AcceptedMessage, RejectReason> {
    let value: Value = serde_json::from_str(payload.as_str())?;

    let has_type = value
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.is_empty());
    if !has_type {
        return Err(RejectReason::MissingType);
    }

    let message: SignalMessage = serde_json::from_value(value)?;

    match &message {
        SignalMessage::Offer { offer } if !is_truthy(offer.as_ref()) => {
            return Err(RejectReason::MissingOffer);
        }
        SignalMessage::Answer { answer } if !is_truthy(answer.as_ref()) => {
            return Err(RejectReason::MissingAnswer);
        }
        _ => {}
    }

    Ok(AcceptedMessage {
        classifies: message.classifies(),
        message,
        payload,
    })
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

// SPDX-License-Identifier: Apache-2.0
use serde_json::Value;

use crate::error::RelayError;

/// The six booking fields a confirmation email is rendered from.
///
/// Built per request from the raw JSON payload and dropped after the send;
/// nothing is persisted.
#[derive(Debug, Clone)]
pub struct BookingNotification {
    pub name: String,
    pub email: String,
    /// Informal enumeration: Annadanam, Pooja, Donation, Volunteer. Not
    /// validated against that set; whatever the portal sends is rendered.
    pub booking_type: String,
    /// Opaque display value, never parsed as a calendar date.
    pub date: String,
    pub slot: String,
    pub booking_id: String,
}

const REQUIRED_FIELDS: [&str; 6] = ["name", "email", "bookingType", "date", "slot", "bookingId"];

impl BookingNotification {
    /// Validate and extract the six required fields from a JSON payload.
    ///
    /// String, number, and bool values are coerced to strings and trimmed,
    /// matching what the booking frontend has historically sent (numeric
    /// booking ids included). A missing key, a blank value, or a value that
    /// is null or structured counts as a missing field.
    pub fn from_payload(payload: &Value) -> Result<Self, RelayError> {
        let object = payload
            .as_object()
            .ok_or_else(|| RelayError::BadPayload("expected a JSON object".into()))?;

        let mut fields = Vec::with_capacity(REQUIRED_FIELDS.len());
        for key in REQUIRED_FIELDS {
            let coerced = object.get(key).and_then(coerce_to_string);
            match coerced {
                Some(value) if !value.is_empty() => fields.push(value),
                _ => return Err(RelayError::Validation),
            }
        }

        let mut fields = fields.into_iter();
        Ok(Self {
            name: fields.next().unwrap(),
            email: fields.next().unwrap(),
            booking_type: fields.next().unwrap(),
            date: fields.next().unwrap(),
            slot: fields.next().unwrap(),
            booking_id: fields.next().unwrap(),
        })
    }
}

/// Render a scalar JSON value as a trimmed string.
fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // null, arrays, and objects have no sensible rendering in an email
        _ => None,
    }
}

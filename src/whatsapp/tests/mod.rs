//! Unit tests for the WhatsApp integration.


use serde_json::{Value, json};

/// Builds a Cloud API `messages` webhook body with one text message per
/// `(from, body)` pair.
pub(super) fn text_event(messages: &[(&str, &str)]) -> Value {
    let messages: Vec<Value> = messages
        .iter()
        .enumerate()
        .map(|(index, (from, body))| {
            json!({
                "from": from,
                "id": format!("wamid.{index}"),
                "timestamp": "1718000000",
                "type": "text",
                "text": { "body": body }
            })
        })
        .collect();

    json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "102290129340398",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "metadata": {
                        "display_phone_number": "15550783881",
                        "phone_number_id": "106540352242922"
                    },
                    "contacts": [{ "profile": { "name": "Kerry" }, "wa_id": "16505551234" }],
                    "messages": messages
                }
            }]
        }]
    })
}

//! Host runtime event shape.
//!
//! The hook is a pure consumer: it reads one event, never produces any.
//! Unknown fields are ignored so schema additions on the host side do not
//! break the hook.

use serde::Deserialize;

/// One event from the host runtime's bus.
#[derive(Debug, Clone, Deserialize)]
pub struct HookEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub context: EventContext,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventContext {
    #[serde(default)]
    pub text: Option<String>,
}

impl HookEvent {
    /// The canonical trigger: an outgoing user-facing message.
    ///
    /// Observed hook variants disagreed on the contract; the stricter
    /// `message`/`send` pair is canonical here. Session-scoped actions do
    /// not trigger playback.
    pub fn is_outgoing_message(&self) -> bool {
        self.kind == "message" && self.action == "send"
    }

    /// Message text, if present and non-empty after trimming.
    pub fn message_text(&self) -> Option<&str> {
        let text = self.context.text.as_deref()?.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, action: &str, text: Option<&str>) -> HookEvent {
        HookEvent {
            kind: kind.to_string(),
            action: action.to_string(),
            context: EventContext {
                text: text.map(str::to_string),
            },
        }
    }

    #[test]
    fn message_send_matches() {
        assert!(event("message", "send", Some("hi")).is_outgoing_message());
    }

    #[test]
    fn other_shapes_do_not_match() {
        assert!(!event("message", "reply", Some("hi")).is_outgoing_message());
        assert!(!event("session", "send", Some("hi")).is_outgoing_message());
        assert!(!event("tool", "call", None).is_outgoing_message());
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(event("message", "send", Some("   ")).message_text(), None);
        assert_eq!(event("message", "send", None).message_text(), None);
        assert_eq!(event("message", "send", Some(" hi ")).message_text(), Some("hi"));
    }

    #[test]
    fn deserializes_with_unknown_fields() {
        let event: HookEvent = serde_json::from_str(
            r#"{"type":"message","action":"send","id":42,"context":{"text":"hello","channel":"cli"}}"#,
        )
        .unwrap();
        assert!(event.is_outgoing_message());
        assert_eq!(event.message_text(), Some("hello"));
    }

    #[test]
    fn missing_context_deserializes() {
        let event: HookEvent = serde_json::from_str(r#"{"type":"tick"}"#).unwrap();
        assert!(!event.is_outgoing_message());
        assert_eq!(event.message_text(), None);
    }
}

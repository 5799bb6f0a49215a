//! Inbound host messages
//!
//! The host posts `{ action, data }` payloads. `OPEN_MENU` and
//! `SHOW_HEADER` are equivalent open commands; unknown actions are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::entry::{Entry, normalize_entries};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HostAction {
    #[serde(rename = "OPEN_MENU")]
    OpenMenu,
    #[serde(rename = "SHOW_HEADER")]
    ShowHeader,
    #[serde(rename = "CLOSE_MENU")]
    CloseMenu,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Raw inbound message as posted by the host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostMessage {
    #[serde(default, deserialize_with = "lenient_action")]
    pub action: HostAction,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Any `action` that is not a known string (numbers, `null`, arrays)
/// decodes to `Unknown` instead of failing the whole message.
fn lenient_action<'de, D>(
    deserializer: D,
) -> std::result::Result<HostAction, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(HostAction::deserialize(value).unwrap_or_default())
}

/// Decoded intent of a host message.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Open(Vec<Entry>),
    Close,
    Ignore,
}

impl HostMessage {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Validate the payload and decode it into a command.
    ///
    /// Open commands require a non-empty array of entry objects; anything
    /// else is rejected. Close and unknown actions never inspect `data`.
    pub fn into_command(self) -> Result<HostCommand> {
        match self.action {
            HostAction::OpenMenu | HostAction::ShowHeader => {
                let data = match self.data {
                    None | Some(Value::Null) => {
                        return Err(ModelError::MissingData);
                    }
                    Some(Value::Array(items)) => items,
                    Some(_) => return Err(ModelError::NotAList),
                };
                if data.is_empty() {
                    return Err(ModelError::EmptyList);
                }
                Ok(HostCommand::Open(normalize_entries(&data)?))
            }
            HostAction::CloseMenu => Ok(HostCommand::Close),
            HostAction::Unknown => Ok(HostCommand::Ignore),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_and_show_header_are_equivalent() {
        for action in ["OPEN_MENU", "SHOW_HEADER"] {
            let msg = HostMessage::from_value(json!({
                "action": action,
                "data": [{ "header": "A" }]
            }))
            .unwrap();
            match msg.into_command().unwrap() {
                HostCommand::Open(entries) => assert_eq!(entries.len(), 1),
                other => panic!("expected open, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_open_payloads_are_rejected() {
        let missing =
            HostMessage::from_value(json!({ "action": "OPEN_MENU" })).unwrap();
        assert!(matches!(
            missing.into_command(),
            Err(ModelError::MissingData)
        ));

        let not_list = HostMessage::from_value(
            json!({ "action": "OPEN_MENU", "data": { "header": "A" } }),
        )
        .unwrap();
        assert!(matches!(not_list.into_command(), Err(ModelError::NotAList)));

        let empty = HostMessage::from_value(
            json!({ "action": "OPEN_MENU", "data": [] }),
        )
        .unwrap();
        assert!(matches!(empty.into_command(), Err(ModelError::EmptyList)));
    }

    #[test]
    fn unknown_and_missing_actions_are_ignored() {
        let unknown = HostMessage::from_json(
            r#"{ "action": "SPIN_AROUND", "data": 5 }"#,
        )
        .unwrap();
        assert_eq!(unknown.into_command().unwrap(), HostCommand::Ignore);

        let bare = HostMessage::from_json("{}").unwrap();
        assert_eq!(bare.into_command().unwrap(), HostCommand::Ignore);
    }

    #[test]
    fn non_string_actions_are_ignored() {
        for text in [
            r#"{"action":7}"#,
            r#"{"action":null}"#,
            r#"{"action":["X"]}"#,
            r#"{"action":{"kind":"OPEN_MENU"},"data":[{"header":"A"}]}"#,
        ] {
            let msg = HostMessage::from_json(text).unwrap();
            assert_eq!(msg.action, HostAction::Unknown, "{text}");
            assert_eq!(msg.into_command().unwrap(), HostCommand::Ignore);
        }
    }

    #[test]
    fn close_ignores_data() {
        let msg = HostMessage::from_json(
            r#"{ "action": "CLOSE_MENU", "data": "whatever" }"#,
        )
        .unwrap();
        assert_eq!(msg.into_command().unwrap(), HostCommand::Close);
    }
}

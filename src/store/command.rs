//! Commands accepted by the store.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{DayOfWeek, Instructor, Period, ScheduleState, SchoolSettings, Session};

/// A request to change the timetable state.
///
/// Commands are data only; [`reduce`](super::reduce) gives them meaning.
/// On the wire a command is `{"type": "MOVE_SESSION", "payload": {...}}`.
/// Any other `type` decodes to [`Command::Unknown`], whatever its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Replace the whole state verbatim, without revalidation.
    LoadState(ScheduleState),
    /// Install instructors, and optionally settings and sessions.
    InitData(InitData),
    /// Replace the school settings.
    UpdateSettings(SchoolSettings),
    /// Place, move, or unplace one session.
    MoveSession(MovePayload),
    /// Any unrecognised command type. Ignored.
    Unknown,
}

/// Tag and untyped payload of a command, before dispatch on the tag.
#[derive(Deserialize)]
struct RawCommand {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawCommand { kind, payload } = RawCommand::deserialize(deserializer)?;
        let payload = payload.unwrap_or(Value::Null);

        let command = match kind.as_str() {
            "LOAD_STATE" => Self::LoadState(typed_payload(payload)?),
            "INIT_DATA" => Self::InitData(typed_payload(payload)?),
            "UPDATE_SETTINGS" => Self::UpdateSettings(typed_payload(payload)?),
            "MOVE_SESSION" => Self::MoveSession(typed_payload(payload)?),
            _ => Self::Unknown,
        };
        Ok(command)
    }
}

fn typed_payload<T: DeserializeOwned, E: de::Error>(payload: Value) -> Result<T, E> {
    serde_json::from_value(payload).map_err(E::custom)
}

/// Payload of [`Command::InitData`].
///
/// `settings` falls back to the current settings. Without `sessions`, the
/// session list is derived from `instructors`' assignments, keeping the
/// placement of current sessions by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SchoolSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<Session>>,
    pub instructors: Vec<Instructor>,
}

/// Payload of [`Command::MoveSession`].
///
/// `day` and `period` are both set to place, both `None` to unplace. A
/// payload with only one of them set unplaces the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub session_id: String,
    #[serde(default)]
    pub day: Option<DayOfWeek>,
    #[serde(default)]
    pub period: Option<Period>,
}

impl Command {
    /// Moves a session to `day`/`period`.
    pub fn move_session(session_id: impl Into<String>, day: DayOfWeek, period: Period) -> Self {
        Self::MoveSession(MovePayload {
            session_id: session_id.into(),
            day: Some(day),
            period: Some(period),
        })
    }

    /// Returns a session to the unplaced pool.
    pub fn unplace_session(session_id: impl Into<String>) -> Self {
        Self::MoveSession(MovePayload {
            session_id: session_id.into(),
            day: None,
            period: None,
        })
    }

    /// Re-derives sessions from a new instructor roster.
    pub fn init_instructors(instructors: Vec<Instructor>) -> Self {
        Self::InitData(InitData {
            settings: None,
            sessions: None,
            instructors,
        })
    }

    /// Wire tag of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadState(_) => "LOAD_STATE",
            Self::InitData(_) => "INIT_DATA",
            Self::UpdateSettings(_) => "UPDATE_SETTINGS",
            Self::MoveSession(_) => "MOVE_SESSION",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether applying the command commits a mutation that must be persisted.
    pub fn commits(&self) -> bool {
        matches!(
            self,
            Self::InitData(_) | Self::UpdateSettings(_) | Self::MoveSession(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_command_wire() {
        let cmd = Command::move_session("s1", DayOfWeek::Tue, 3);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "MOVE_SESSION",
                "payload": {"sessionId": "s1", "day": "Tue", "period": 3}
            })
        );
    }

    #[test]
    fn test_unplace_from_wire() {
        let cmd: Command =
            serde_json::from_str(r#"{"type":"MOVE_SESSION","payload":{"sessionId":"s1"}}"#)
                .unwrap();
        assert_eq!(cmd, Command::unplace_session("s1"));
    }

    #[test]
    fn test_init_data_optional_fields() {
        let cmd: Command =
            serde_json::from_str(r#"{"type":"INIT_DATA","payload":{"instructors":[]}}"#).unwrap();
        assert_eq!(cmd, Command::init_instructors(Vec::new()));
    }

    #[test]
    fn test_unknown_command() {
        let cmd: Command = serde_json::from_str(r#"{"type":"RESET_BOARD"}"#).unwrap();
        assert_eq!(cmd, Command::Unknown);
        assert!(!cmd.commits());
    }

    #[test]
    fn test_unknown_command_with_payload() {
        let cmd: Command =
            serde_json::from_str(r#"{"type":"RESET_BOARD","payload":{"x":1}}"#).unwrap();
        assert_eq!(cmd, Command::Unknown);

        let cmd: Command =
            serde_json::from_str(r#"{"type":"RESET_BOARD","payload":[1, "two"]}"#).unwrap();
        assert_eq!(cmd, Command::Unknown);

        let cmd: Command = serde_json::from_str(r#"{"type":"RESET_BOARD","payload":null}"#).unwrap();
        assert_eq!(cmd, Command::Unknown);
    }

    #[test]
    fn test_known_command_bad_payload_rejected() {
        let result = serde_json::from_str::<Command>(r#"{"type":"MOVE_SESSION","payload":{"x":1}}"#);
        assert!(result.is_err());
        assert!(serde_json::from_str::<Command>(r#"{"payload":{}}"#).is_err());
    }

    #[test]
    fn test_settings_command_wire() {
        let cmd = Command::UpdateSettings(SchoolSettings::default());
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_commits() {
        assert!(!Command::LoadState(ScheduleState::default()).commits());
        assert!(Command::UpdateSettings(SchoolSettings::default()).commits());
        assert!(Command::unplace_session("s").commits());
        assert_eq!(Command::init_instructors(vec![]).name(), "INIT_DATA");
    }
}

//! Gating requirements - ordered prerequisite tasks on a Space.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What kind of task a requirement gates on.
///
/// `Unknown` absorbs kinds introduced server-side that this client does not
/// understand yet; the gating flow renders no gate for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementKind {
    /// A mandatory poll the viewer must answer before entering the Space.
    PrePoll,
    Unknown,
}

impl Serialize for RequirementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            RequirementKind::PrePoll => "PrePoll",
            RequirementKind::Unknown => "Unknown",
        })
    }
}

impl<'de> Deserialize<'de> for RequirementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "PrePoll" => RequirementKind::PrePoll,
            _ => RequirementKind::Unknown,
        })
    }
}

/// One gating task. Created server-side when a Space is configured with
/// prerequisites; the client only reads `responded` and walks a local
/// cursor over the ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub pk: String,
    pub sk: String,

    /// Evaluation position; requirements are consumed in ascending order.
    pub order: i64,

    pub kind: RequirementKind,

    /// Pointer to the gated sub-resource (e.g. the pre-poll).
    pub related_pk: String,
    pub related_sk: String,

    /// Permanently true once the viewer has satisfied the task.
    #[serde(default)]
    pub responded: bool,
}

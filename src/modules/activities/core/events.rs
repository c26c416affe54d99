#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUp { email: String },
    ParticipantUnregistered { email: String },
}

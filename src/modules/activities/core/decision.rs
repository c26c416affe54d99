use crate::modules::activities::core::events::ActivityEvent;

/// Rejection reasons. The `Display` text is what callers see as `detail`.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}

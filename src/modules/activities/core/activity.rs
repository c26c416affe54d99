use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole directory, keyed by activity name. Iteration follows seed order.
pub type Activities = IndexMap<String, Activity>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational only, signups are never refused on capacity.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

use crate::modules::activities::core::activity::Activity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityState {
    Unknown,
    Listed(Activity),
}

impl ActivityState {
    pub fn into_activity(self) -> Option<Activity> {
        match self {
            ActivityState::Listed(activity) => Some(activity),
            ActivityState::Unknown => None,
        }
    }
}

impl From<Option<Activity>> for ActivityState {
    fn from(activity: Option<Activity>) -> Self {
        activity.map_or(ActivityState::Unknown, ActivityState::Listed)
    }
}

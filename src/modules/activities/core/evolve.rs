use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::ActivityState;

pub fn evolve(state: ActivityState, event: ActivityEvent) -> ActivityState {
    match (state, event) {
        (ActivityState::Listed(mut activity), ActivityEvent::ParticipantSignedUp { email }) => {
            activity.participants.push(email);
            ActivityState::Listed(activity)
        }
        (ActivityState::Listed(mut activity), ActivityEvent::ParticipantUnregistered { email }) => {
            if let Some(index) = activity.participants.iter().position(|p| *p == email) {
                activity.participants.remove(index);
            }
            ActivityState::Listed(activity)
        }
        (state, _) => state,
    }
}

// Decide and evolve one activity inside a single store transaction.
//
// The roster seen by `decide` is the roster the events are applied to, so two
// concurrent signups of the same email can never both be appended.

use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::activity_store::ActivityStore;

pub async fn commit<TStore, F>(
    store: &TStore,
    activity_name: &str,
    decide: F,
) -> Result<(), ApplicationError>
where
    TStore: ActivityStore,
    F: FnOnce(&ActivityState) -> Decision + Send,
{
    store
        .transact(activity_name, |state| {
            let events = match decide(&state) {
                Decision::Accepted { events } => events,
                Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
            };
            events
                .into_iter()
                .fold(state, evolve)
                .into_activity()
                .ok_or_else(|| {
                    ApplicationError::Unexpected(format!(
                        "accepted change on unknown activity {activity_name}"
                    ))
                })
        })
        .await
}

// Pure decision function for removing a student from an activity.

use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::unregister::command::Unregister;

pub fn decide_unregister(state: &ActivityState, command: &Unregister) -> Decision {
    match state {
        ActivityState::Unknown => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        ActivityState::Listed(activity) if !activity.is_participant(&command.email) => {
            Decision::Rejected {
                reason: DecideError::NotRegistered,
            }
        }
        ActivityState::Listed(_) => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantUnregistered {
                email: command.email.clone(),
            }],
        },
    }
}

#[cfg(test)]
mod unregister_decide_tests {
    use super::*;
    use crate::tests::fixtures::activities::ActivityBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn basketball() -> ActivityState {
        ActivityState::Listed(ActivityBuilder::basketball().build())
    }

    fn unregister(email: &str) -> Unregister {
        Unregister {
            activity_name: "Basketball".into(),
            email: email.into(),
        }
    }

    #[rstest]
    fn it_should_decide_to_unregister_a_participant(basketball: ActivityState) {
        let decision = decide_unregister(&basketball, &unregister("alex@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Accepted {
                events: vec![ActivityEvent::ParticipantUnregistered {
                    email: "alex@mergington.edu".into()
                }]
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_student_that_is_not_registered(basketball: ActivityState) {
        let decision =
            decide_unregister(&basketball, &unregister("notregistered@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::NotRegistered
            }
        );
    }

    #[rstest]
    fn it_should_check_the_activity_before_the_roster() {
        let decision =
            decide_unregister(&ActivityState::Unknown, &unregister("alex@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::ActivityNotFound
            }
        );
    }
}

// Pure decision function for signing a student up.
//
// - Unknown activity is rejected before membership is looked at.
// - Capacity is not checked.
// - Never performs input or output.

use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::sign_up::command::SignUp;

pub fn decide_sign_up(state: &ActivityState, command: &SignUp) -> Decision {
    match state {
        ActivityState::Unknown => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        ActivityState::Listed(activity) if activity.is_participant(&command.email) => {
            Decision::Rejected {
                reason: DecideError::AlreadySignedUp,
            }
        }
        ActivityState::Listed(_) => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantSignedUp {
                email: command.email.clone(),
            }],
        },
    }
}

#[cfg(test)]
mod sign_up_decide_tests {
    use super::*;
    use crate::tests::fixtures::activities::ActivityBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn basketball() -> ActivityState {
        ActivityState::Listed(ActivityBuilder::basketball().build())
    }

    fn sign_up(email: &str) -> SignUp {
        SignUp {
            activity_name: "Basketball".into(),
            email: email.into(),
        }
    }

    #[rstest]
    fn it_should_decide_to_sign_up_a_new_student(basketball: ActivityState) {
        let decision = decide_sign_up(&basketball, &sign_up("newstudent@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Accepted {
                events: vec![ActivityEvent::ParticipantSignedUp {
                    email: "newstudent@mergington.edu".into()
                }]
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_student_that_is_already_signed_up(basketball: ActivityState) {
        let decision = decide_sign_up(&basketball, &sign_up("alex@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::AlreadySignedUp
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_activity() {
        let decision = decide_sign_up(&ActivityState::Unknown, &sign_up("alex@mergington.edu"));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::ActivityNotFound
            }
        );
    }

    #[rstest]
    fn it_should_accept_signups_beyond_capacity() {
        let full = ActivityState::Listed(
            ActivityBuilder::new()
                .max_participants(1)
                .participants(vec!["only@mergington.edu".into()])
                .build(),
        );
        let decision = decide_sign_up(&full, &sign_up("extra@mergington.edu"));
        assert!(matches!(decision, Decision::Accepted { .. }));
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("")]
    #[case("  spaced out  ")]
    fn it_should_accept_any_string_as_an_email(basketball: ActivityState, #[case] email: &str) {
        let decision = decide_sign_up(&basketball, &sign_up(email));
        assert!(matches!(decision, Decision::Accepted { .. }));
    }
}

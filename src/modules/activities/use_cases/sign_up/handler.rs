use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::commit::commit;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use crate::shared::infrastructure::activity_store::ActivityStore;
use std::sync::Arc;

pub struct SignUpHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message shown to the student.
    pub async fn handle(&self, command: SignUp) -> Result<String, ApplicationError> {
        commit(&*self.store, &command.activity_name, |state| {
            decide_sign_up(state, &command)
        })
        .await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "student signed up"
        );
        Ok(format!(
            "Signed up {} for {}",
            command.email, command.activity_name
        ))
    }
}

use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::commit::commit;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::decide::decide_unregister;
use crate::shared::infrastructure::activity_store::ActivityStore;
use std::sync::Arc;

pub struct UnregisterHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: Unregister) -> Result<String, ApplicationError> {
        commit(&*self.store, &command.activity_name, |state| {
            decide_unregister(state, &command)
        })
        .await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "student unregistered"
        );
        Ok(format!(
            "Unregistered {} from {}",
            command.email, command.activity_name
        ))
    }
}

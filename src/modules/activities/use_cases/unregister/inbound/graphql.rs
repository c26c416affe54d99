use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .unregister_handler
            .handle(Unregister {
                activity_name,
                email,
            })
            .await
            .map_err(|e| {
                e.report();
                async_graphql::Error::new(e.detail())
            })
    }
}

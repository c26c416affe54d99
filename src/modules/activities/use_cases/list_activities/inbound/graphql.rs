use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::core::activity::Activity;
use crate::shared::http::INTERNAL_SERVER_ERROR_DETAIL;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<(String, Activity)> for GqlActivity {
    fn from((name, a): (String, Activity)) -> Self {
        Self {
            name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state.queries.list_activities().await.map_err(|e| {
            tracing::error!(error = %e, "listing activities failed");
            async_graphql::Error::new(INTERNAL_SERVER_ERROR_DETAIL)
        })?;
        Ok(activities.into_iter().map(Into::into).collect())
    }
}

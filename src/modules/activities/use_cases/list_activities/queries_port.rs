use crate::modules::activities::core::activity::Activities;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<Activities>;
}

// Port for the activity directory storage.
//
// Purpose
// - Let command handlers change one activity as a single atomic step.
//
// Responsibilities
// - Run the transition and write its result back without any other change to the
//   directory in between.
// - Never create or delete activities, the directory keys are fixed at startup.

pub mod in_memory;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::state::ActivityState;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Hands the current state to `transition` and stores the activity it returns.
    /// A transition error leaves the directory untouched.
    async fn transact<F, E>(&self, activity_name: &str, transition: F) -> Result<(), E>
    where
        F: FnOnce(ActivityState) -> Result<Activity, E> + Send,
        E: From<StoreError> + Send;
}

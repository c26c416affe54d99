// In memory implementation of the ActivityStore port and the activity queries.
//
// Purpose
// - Hold the process-wide directory for the life of the process.
//
// Responsibilities
// - Hold the write guard from reading the state until the new roster is written.

use crate::modules::activities::core::activity::{Activities, Activity};
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::shared::infrastructure::activity_store::{ActivityStore, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    inner: RwLock<Activities>,
    is_offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new(activities: Activities) -> Self {
        Self {
            inner: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps inside every transaction while the write guard is held.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn transact<F, E>(&self, activity_name: &str, transition: F) -> Result<(), E>
    where
        F: FnOnce(ActivityState) -> Result<Activity, E> + Send,
        E: From<StoreError> + Send,
    {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;

        let delay = self.delay_write_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let state = ActivityState::from(guard.get(activity_name).cloned());
        let activity = transition(state)?;

        let slot = guard
            .get_mut(activity_name)
            .ok_or_else(|| StoreError::UnknownActivity(activity_name.to_string()))?;
        *slot = activity;
        Ok(())
    }
}

#[async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Activities> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }
        Ok(self.inner.read().await.clone())
    }
}

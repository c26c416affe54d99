use crate::modules::activities::core::activity::Activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister::handler::UnregisterHandler;
use crate::shared::infrastructure::activity_store::in_memory::InMemoryActivityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryActivityStore>>,
    pub unregister_handler: Arc<UnregisterHandler<InMemoryActivityStore>>,
}

impl AppState {
    pub fn in_memory(activities: Activities) -> Self {
        Self::from_store(Arc::new(InMemoryActivityStore::new(activities)))
    }

    pub fn from_store(store: Arc<InMemoryActivityStore>) -> Self {
        Self {
            queries: store.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(store)),
        }
    }
}

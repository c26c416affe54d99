use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister::inbound::http as unregister_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

async fn landing() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(landing))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .route(
            GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::graphql),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

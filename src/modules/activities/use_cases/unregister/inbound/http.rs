use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shared::http::{EmailQuery, ErrorDetail, MISSING_EMAIL_DETAIL, MessageBody};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(params)) = params else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail::new(MISSING_EMAIL_DETAIL)),
        )
            .into_response();
    };

    let command = Unregister {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageBody::new(message)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod unregister_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::activities::core::seed::seed_activities;
    use crate::shell::state::AppState;

    use super::handle;

    fn app() -> Router {
        Router::new()
            .route("/activities/{activity_name}/unregister", delete(handle))
            .with_state(AppState::in_memory(seed_activities()))
    }

    async fn delete_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::delete(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_confirmation_message() {
        let (status, json) =
            delete_json("/activities/Basketball/unregister?email=alex@mergington.edu").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"message": "Unregistered alex@mergington.edu from Basketball"})
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let (status, json) =
            delete_json("/activities/NonexistentActivity/unregister?email=student@mergington.edu")
                .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({"detail": "Activity not found"}));
    }

    #[tokio::test]
    async fn it_should_return_400_when_not_registered() {
        let (status, json) =
            delete_json("/activities/Basketball/unregister?email=notregistered@mergington.edu")
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({"detail": "Student not registered for this activity"})
        );
    }

    #[tokio::test]
    async fn it_should_return_422_when_email_is_missing() {
        let (status, json) = delete_json("/activities/Basketball/unregister").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json,
            serde_json::json!({"detail": "Missing required query parameter: email"})
        );
    }
}

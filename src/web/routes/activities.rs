use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::activity_registry::ActivityMap;
use crate::errors::RegistryError;
use crate::services::enrollment_service;
use crate::web::SharedActivityStore;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(store): State<SharedActivityStore>) -> Json<ActivityMap> {
    Json(enrollment_service::list_activities(store.as_ref()))
}

// `Path` percent-decodes, so "Tennis%20Club" arrives as "Tennis Club".
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedActivityStore>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let message = enrollment_service::signup(store.as_ref(), &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedActivityStore>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let message = enrollment_service::unregister(store.as_ref(), &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_locker_master::{LockerDetailsResponse, LockerMasterResponse};
use serde::Deserialize;

use crate::domain::a001_locker_master::repository::{LockerStore, LockerStoreError};
use crate::domain::a001_locker_master::service;

#[derive(Debug, Deserialize)]
pub struct LockerMasterQuery {
    #[serde(rename = "lockerCenterId")]
    pub locker_center_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LockerDetailsQuery {
    pub customer_id: Option<String>,
}

fn parse_id(value: Option<&str>) -> Result<i64, StatusCode> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or(StatusCode::BAD_REQUEST)
}

fn error_status(e: &LockerStoreError) -> StatusCode {
    match e {
        LockerStoreError::CenterNotFound(_) | LockerStoreError::CustomerNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        LockerStoreError::Io(_) | LockerStoreError::InvalidSeed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /lockers/locker-master?lockerCenterId={id}
pub async fn get_locker_master(
    State(store): State<Arc<LockerStore>>,
    Query(query): Query<LockerMasterQuery>,
) -> Result<Json<LockerMasterResponse>, StatusCode> {
    let center_id = parse_id(query.locker_center_id.as_deref())?;
    match service::get_locker_master(&store, center_id) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("Locker master request failed: {}", e);
            Err(error_status(&e))
        }
    }
}

/// GET /lockers/locker-details?customer_id={id}
pub async fn get_locker_details(
    State(store): State<Arc<LockerStore>>,
    Query(query): Query<LockerDetailsQuery>,
) -> Result<Json<LockerDetailsResponse>, StatusCode> {
    let customer_id = parse_id(query.customer_id.as_deref())?;
    match service::get_locker_details(&store, customer_id) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("Locker details request failed: {}", e);
            Err(error_status(&e))
        }
    }
}

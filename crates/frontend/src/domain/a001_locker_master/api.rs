use contracts::domain::a001_locker_master::{LockerDetailsResponse, LockerMasterResponse};

use crate::shared::api_utils::get_json_authorized;

/// GET /lockers/locker-master?lockerCenterId={id}
pub async fn fetch_locker_master(center_id: i64) -> Result<LockerMasterResponse, String> {
    get_json_authorized(
        &format!("/lockers/locker-master?lockerCenterId={}", center_id),
        "lockers",
    )
    .await
}

/// GET /lockers/locker-details?customer_id={id}
pub async fn fetch_locker_details(customer_id: i64) -> Result<LockerDetailsResponse, String> {
    get_json_authorized(
        &format!("/lockers/locker-details?customer_id={}", customer_id),
        "locker details",
    )
    .await
}

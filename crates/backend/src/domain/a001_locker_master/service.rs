use contracts::domain::a001_locker_master::{
    LockerDetailsResponse, LockerMasterIndex, LockerMasterResponse,
};

use super::repository::{LockerStore, LockerStoreError};

/// Мастер-дерево ячеек центра
pub fn get_locker_master(
    store: &LockerStore,
    center_id: i64,
) -> Result<LockerMasterResponse, LockerStoreError> {
    let response = store.locker_master(center_id)?.clone();

    tracing::debug!(
        "Locker master for center {}: {} rooms, {} reserved",
        center_id,
        room_count(&response),
        response.mapped_lockers.len()
    );

    Ok(response)
}

fn room_count(response: &LockerMasterResponse) -> usize {
    response.master.iter().map(|entry| entry.rooms.len()).sum()
}

/// Привязка клиента к ячейке
pub fn get_locker_details(
    store: &LockerStore,
    customer_id: i64,
) -> Result<LockerDetailsResponse, LockerStoreError> {
    let details = store.locker_details(customer_id)?.clone();

    // Ячейка должна существовать в мастер-дереве своего центра
    if let (Some(center_id), Some(locker_id)) = (details.locker_center_id, details.locker_id) {
        let known = store
            .locker_master(center_id)
            .map(|m| LockerMasterIndex::from_response(m).find_locker(locker_id).is_some())
            .unwrap_or(false);
        if !known {
            tracing::warn!(
                "Customer {} is bound to locker {} missing from center {}",
                customer_id,
                locker_id,
                center_id
            );
        }
    }

    Ok(details)
}

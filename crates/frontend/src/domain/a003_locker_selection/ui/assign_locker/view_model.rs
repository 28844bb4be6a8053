use contracts::domain::a001_locker_master::CabinetNumber;
use contracts::domain::a003_locker_selection::{AssignLockerSession, ClickOutcome, FetchTicket, LoadState};
use contracts::domain::a004_holder::AssignmentResult;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_locker_master::api;
use crate::domain::a004_holder::store::HolderFormStore;
use crate::shared::logger::log_event;

/// ViewModel for the Assign Locker modal
#[derive(Clone, Copy)]
pub struct AssignLockerViewModel {
    pub session: RwSignal<AssignLockerSession>,
    customer_id: Option<i64>,
}

impl AssignLockerViewModel {
    pub fn new(center_id: Option<i64>, customer_id: Option<i64>) -> Self {
        Self {
            session: RwSignal::new(AssignLockerSession::open(center_id)),
            customer_id,
        }
    }

    /// Load master data for the session's center
    pub fn load(&self) {
        let ticket = self.session.try_update(|s| s.begin_fetch()).flatten();
        self.spawn_fetch(ticket);
    }

    /// Manual retry after a failed load
    pub fn retry(&self) {
        log::info!("Retrying locker master load");
        let ticket = self.session.try_update(|s| s.retry()).flatten();
        self.spawn_fetch(ticket);
    }

    fn spawn_fetch(&self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            if let LoadState::Failed(message) = self.session.with_untracked(|s| s.load_state().clone()) {
                log::warn!("Locker master load not started: {}", message);
            }
            return;
        };

        let session = self.session;
        let customer_id = self.customer_id;
        spawn_local(async move {
            let result = api::fetch_locker_master(ticket.center_id).await;
            if let Err(e) = &result {
                log::error!("Failed to load lockers for center {}: {}", ticket.center_id, e);
            }
            let loaded = result.is_ok();

            let applied = session
                .try_update(|s| s.apply_fetch(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale locker master response ({})", ticket.session_id);
                return;
            }

            if let (true, Some(customer_id)) = (loaded, customer_id) {
                preselect_customer_locker(session, customer_id).await;
            }
        });
    }

    pub fn select_room(&self, value: String) {
        let room = value.trim().parse::<i64>().ok();
        self.session.update(|s| s.select_room(room));
    }

    pub fn select_cabinet(&self, value: String) {
        let cabinet = CabinetNumber::from_label(&value);
        self.session.update(|s| s.select_cabinet(cabinet));
    }

    pub fn select_size(&self, value: String) {
        let size = if value.is_empty() { None } else { Some(value) };
        self.session.update(|s| s.select_size(size));
    }

    pub fn click_locker(&self, locker_id: i64) {
        let outcome = self
            .session
            .try_update(|s| s.click_locker(locker_id))
            .unwrap_or(ClickOutcome::Ignored);
        log::debug!("Locker {} click: {:?}", locker_id, outcome);
    }

    pub fn click_reserved(&self, locker_id: i64) {
        self.session.update(|s| {
            s.click_reserved(locker_id);
        });
    }

    pub fn can_assign(&self) -> bool {
        self.session.with(|s| s.can_assign())
    }

    /// Commit the selection into the holder forms and close the session
    pub fn assign_command(&self, store: HolderFormStore, on_assigned: Callback<AssignmentResult>) {
        let mut session = self.session.get_untracked();
        let mut result = None;
        store.forms.update(|forms| result = session.assign(forms));
        self.session.set(session);

        if let Some(result) = result {
            log_event(
                "locker_assignment",
                &format!(
                    "Assigned locker {} (id {}, size {})",
                    result.locker_number, result.locker_id, result.size
                ),
            );
            on_assigned.run(result);
        }
    }

    pub fn close(&self) {
        self.session.update(|s| s.close());
    }
}

async fn preselect_customer_locker(session: RwSignal<AssignLockerSession>, customer_id: i64) {
    match api::fetch_locker_details(customer_id).await {
        Ok(details) => {
            let applied = session
                .try_update(|s| s.preselect(&details))
                .unwrap_or(false);
            if !applied {
                log::debug!(
                    "Locker of customer {} not preselected (other center, unknown locker or user already chose)",
                    customer_id
                );
            }
        }
        Err(e) => log::warn!("Failed to load locker details for customer {}: {}", customer_id, e),
    }
}

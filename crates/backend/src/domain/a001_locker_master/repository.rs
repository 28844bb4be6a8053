use std::collections::HashMap;
use std::path::Path;

use contracts::domain::a001_locker_master::{LockerDetailsResponse, LockerMasterResponse};
use serde::Deserialize;
use thiserror::Error;

/// Встроенный демонстрационный набор центров и клиентов
const DEMO_SEED: &str = include_str!("../../../seed/demo_centers.json");

#[derive(Debug, Error)]
pub enum LockerStoreError {
    #[error("locker center {0} not found")]
    CenterNotFound(i64),

    #[error("customer {0} not found")]
    CustomerNotFound(i64),

    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    centers: Vec<CenterSeed>,
    #[serde(default)]
    customers: Vec<LockerDetailsResponse>,
}

#[derive(Debug, Deserialize)]
struct CenterSeed {
    locker_center_id: i64,
    #[serde(flatten)]
    locker_master: LockerMasterResponse,
}

/// Данные ячеек в памяти: мастер-дерево по центрам и привязки клиентов
#[derive(Debug, Default)]
pub struct LockerStore {
    centers: HashMap<i64, LockerMasterResponse>,
    customers: HashMap<i64, LockerDetailsResponse>,
}

impl LockerStore {
    pub fn from_json(json: &str) -> Result<Self, LockerStoreError> {
        let seed: SeedFile = serde_json::from_str(json)?;

        let mut store = Self::default();
        for center in seed.centers {
            if store.centers.contains_key(&center.locker_center_id) {
                tracing::warn!(
                    "Duplicate locker center {} in seed, keeping the first one",
                    center.locker_center_id
                );
                continue;
            }
            store
                .centers
                .insert(center.locker_center_id, center.locker_master);
        }
        for customer in seed.customers {
            store.customers.insert(customer.customer_id, customer);
        }
        Ok(store)
    }

    /// Загрузить seed-файл; если файла нет, используется встроенный набор
    pub fn load(path: &Path) -> Result<Self, LockerStoreError> {
        if !path.exists() {
            tracing::warn!(
                "Seed file not found at {}, using embedded demo data",
                path.display()
            );
            return Self::demo();
        }

        tracing::info!("Loading locker seed from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn demo() -> Result<Self, LockerStoreError> {
        Self::from_json(DEMO_SEED)
    }

    pub fn locker_master(&self, center_id: i64) -> Result<&LockerMasterResponse, LockerStoreError> {
        self.centers
            .get(&center_id)
            .ok_or(LockerStoreError::CenterNotFound(center_id))
    }

    pub fn locker_details(
        &self,
        customer_id: i64,
    ) -> Result<&LockerDetailsResponse, LockerStoreError> {
        self.customers
            .get(&customer_id)
            .ok_or(LockerStoreError::CustomerNotFound(customer_id))
    }

    pub fn center_count(&self) -> usize {
        self.centers.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_loads() {
        let store = LockerStore::demo().unwrap();
        assert_eq!(store.center_count(), 2);
        assert_eq!(store.customer_count(), 2);

        let master = store.locker_master(7).unwrap();
        assert_eq!(master.master.len(), 1);
        assert_eq!(master.mapped_lockers.len(), 1);
        assert_eq!(master.master[0].rooms[0].cabinets.len(), 2);
    }

    #[test]
    fn test_unknown_ids() {
        let store = LockerStore::demo().unwrap();
        assert!(matches!(
            store.locker_master(999),
            Err(LockerStoreError::CenterNotFound(999))
        ));
        assert!(matches!(
            store.locker_details(42),
            Err(LockerStoreError::CustomerNotFound(42))
        ));
    }

    #[test]
    fn test_customer_without_locker() {
        let store = LockerStore::demo().unwrap();
        let details = store.locker_details(1002).unwrap();
        assert_eq!(details.locker_center_id, None);
        assert_eq!(details.locker_id, None);
    }

    #[test]
    fn test_duplicate_center_keeps_first() {
        let json = r#"{
            "centers": [
                {"locker_center_id": 1, "master": [], "mappedLockers": [
                    {"locker_id": 1, "locker_name": "A", "size": "Small", "status": "available"}
                ]},
                {"locker_center_id": 1, "master": [], "mappedLockers": []}
            ]
        }"#;
        let store = LockerStore::from_json(json).unwrap();
        assert_eq!(store.center_count(), 1);
        assert_eq!(store.locker_master(1).unwrap().mapped_lockers.len(), 1);
    }

    #[test]
    fn test_invalid_seed() {
        assert!(matches!(
            LockerStore::from_json("{ not json"),
            Err(LockerStoreError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_demo() {
        let store = LockerStore::load(Path::new("definitely/not/here.json")).unwrap();
        assert!(store.locker_master(7).is_ok());
    }
}

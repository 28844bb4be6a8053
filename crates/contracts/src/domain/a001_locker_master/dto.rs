//! Wire-контракт эндпоинтов `/lockers/*`
//!
//! Имена полей на проводе сохранены как есть (включая `cabinates` и поле
//! `size`, которое у кабинета является массивом групп размеров). Внутри
//! используются понятные имена через `#[serde(rename)]`.

use serde::{Deserialize, Serialize};

use crate::enums::LockerStatus;

/// Ответ `GET /lockers/locker-master?lockerCenterId={id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockerMasterResponse {
    #[serde(default)]
    pub master: Vec<LockerMasterEntryDto>,

    #[serde(rename = "mappedLockers", default)]
    pub mapped_lockers: Vec<MappedLockerDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockerMasterEntryDto {
    #[serde(default)]
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    pub room_id: i64,

    #[serde(rename = "cabinates", default)]
    pub cabinets: Vec<CabinetDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CabinetDto {
    #[serde(rename = "size", default)]
    pub size_groups: Vec<SizeGroupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeGroupDto {
    pub size: String,

    #[serde(default)]
    pub lockers: Vec<LockerDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockerDto {
    pub locker_id: i64,
    pub locker_name: String,
    pub status: LockerStatus,
}

/// Закрепленная за центром/клиентом ячейка ("mappedLockers")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedLockerDto {
    pub locker_id: i64,
    pub locker_name: String,
    pub size: String,
    pub status: LockerStatus,
}

/// Ответ `GET /lockers/locker-details?customer_id={id}`
///
/// Привязка клиента к ячейке; используется при редактировании клиента
/// для предвыбора центра и ячейки.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockerDetailsResponse {
    pub customer_id: i64,
    #[serde(default)]
    pub locker_center_id: Option<i64>,
    #[serde(default)]
    pub locker_id: Option<i64>,
    #[serde(default)]
    pub locker_name: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_payload() {
        let json = r#"{
            "master": [{
                "rooms": [{
                    "room_id": 3,
                    "cabinates": [{
                        "size": [{
                            "size": "Small",
                            "lockers": [
                                {"locker_id": 1, "locker_name": "S-01", "status": "available"},
                                {"locker_id": 2, "locker_name": "S-02", "status": "occupied"}
                            ]
                        }]
                    }]
                }]
            }],
            "mappedLockers": [
                {"locker_id": 9, "locker_name": "R-01", "size": "Large", "status": "occupied"}
            ]
        }"#;

        let response: LockerMasterResponse = serde_json::from_str(json).unwrap();
        let room = &response.master[0].rooms[0];
        assert_eq!(room.room_id, 3);
        assert_eq!(room.cabinets.len(), 1);
        assert_eq!(room.cabinets[0].size_groups[0].size, "Small");
        assert_eq!(
            room.cabinets[0].size_groups[0].lockers[1].status,
            LockerStatus::Occupied
        );
        assert_eq!(response.mapped_lockers[0].locker_name, "R-01");
    }

    #[test]
    fn test_wire_names_preserved_on_serialize() {
        let response = LockerMasterResponse {
            master: vec![LockerMasterEntryDto {
                rooms: vec![RoomDto {
                    room_id: 1,
                    cabinets: vec![CabinetDto::default()],
                }],
            }],
            mapped_lockers: Vec::new(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["master"][0]["rooms"][0]["cabinates"].is_array());
        assert!(value["master"][0]["rooms"][0]["cabinates"][0]["size"].is_array());
        assert!(value["mappedLockers"].is_array());
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let response: LockerMasterResponse =
            serde_json::from_str(r#"{"master": [{"rooms": [{"room_id": 5}]}]}"#).unwrap();
        assert!(response.master[0].rooms[0].cabinets.is_empty());
        assert!(response.mapped_lockers.is_empty());
    }
}

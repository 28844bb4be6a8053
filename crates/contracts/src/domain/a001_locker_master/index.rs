//! Индекс мастер-данных ячеек
//!
//! Строится один раз на открытие центра и отвечает на вопросы
//! "какие комнаты / кабинеты / размеры / ячейки есть". Любой запрос
//! по несуществующей комнате, кабинету или размеру возвращает пустой
//! результат: для UI это нормальное состояние (неактивный селектор).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::aggregate::{CabinetIndex, CabinetNumber, Locker, LockerMaster, ReservedLocker, Room};
use super::dto::LockerMasterResponse;

/// Откуда брать ячейки для сетки выбранного размера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockerSourcing {
    /// Всегда из первого кабинета комнаты, независимо от выбранного
    /// номера кабинета (поведение действующей системы)
    #[default]
    FirstCabinet,
    /// Из выбранного кабинета
    SelectedCabinet,
}

/// Где в дереве находится ячейка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerLocation {
    pub room_id: i64,
    pub cabinet: CabinetNumber,
    pub size: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockerMasterIndex {
    master: LockerMaster,
    reserved: Vec<ReservedLocker>,
    room_ids: Vec<i64>,
    room_positions: HashMap<i64, usize>,
}

impl LockerMasterIndex {
    pub fn new(master: LockerMaster, reserved: Vec<ReservedLocker>) -> Self {
        let mut room_ids = Vec::with_capacity(master.rooms.len());
        let mut room_positions = HashMap::with_capacity(master.rooms.len());
        for (position, room) in master.rooms.iter().enumerate() {
            // Повторяющийся room_id: побеждает первое вхождение
            if !room_positions.contains_key(&room.room_id) {
                room_positions.insert(room.room_id, position);
                room_ids.push(room.room_id);
            }
        }

        Self {
            master,
            reserved,
            room_ids,
            room_positions,
        }
    }

    pub fn from_response(response: &LockerMasterResponse) -> Self {
        let reserved = response.mapped_lockers.iter().map(ReservedLocker::from).collect();
        Self::new(LockerMaster::from_response(response), reserved)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn master(&self) -> &LockerMaster {
        &self.master
    }

    pub fn reserved_lockers(&self) -> &[ReservedLocker] {
        &self.reserved
    }

    pub fn find_reserved(&self, locker_id: i64) -> Option<&ReservedLocker> {
        self.reserved.iter().find(|r| r.locker_id == locker_id)
    }

    fn room(&self, room_id: i64) -> Option<&Room> {
        self.room_positions
            .get(&room_id)
            .and_then(|&position| self.master.rooms.get(position))
    }

    /// Идентификаторы комнат в порядке мастер-данных
    pub fn list_rooms(&self) -> Vec<i64> {
        self.room_ids.clone()
    }

    /// Номера кабинетов комнаты: `["1", "2", ..., "N"]`
    pub fn list_cabinets(&self, room_id: i64) -> Vec<String> {
        self.cabinet_numbers(room_id)
            .into_iter()
            .map(|number| number.label())
            .collect()
    }

    pub fn cabinet_numbers(&self, room_id: i64) -> Vec<CabinetNumber> {
        self.room(room_id)
            .map(|room| room.cabinets.iter().map(|c| c.number()).collect())
            .unwrap_or_default()
    }

    /// Уникальные метки размеров кабинета в порядке первого появления
    pub fn list_sizes(&self, room_id: i64, cabinet: CabinetNumber) -> Vec<String> {
        let Some(cabinet) = self.room(room_id).and_then(|room| room.cabinet(cabinet)) else {
            return Vec::new();
        };

        let mut sizes: Vec<String> = Vec::new();
        for group in &cabinet.size_groups {
            if !sizes.iter().any(|s| s == &group.size) {
                sizes.push(group.size.clone());
            }
        }
        sizes
    }

    /// Ячейки размера `size` из первого кабинета комнаты,
    /// отсортированные по `locker_name` (строковая сортировка)
    pub fn list_lockers_for_size(&self, room_id: i64, size: &str) -> Vec<Locker> {
        self.lockers_in(room_id, CabinetIndex(0), size)
    }

    /// Ячейки размера `size` из выбранного кабинета
    pub fn list_lockers_for_cabinet(
        &self,
        room_id: i64,
        cabinet: CabinetNumber,
        size: &str,
    ) -> Vec<Locker> {
        self.lockers_in(room_id, cabinet.index(), size)
    }

    /// Ячейки для сетки с учетом политики выбора кабинета
    pub fn list_lockers(
        &self,
        room_id: i64,
        cabinet: CabinetNumber,
        size: &str,
        sourcing: LockerSourcing,
    ) -> Vec<Locker> {
        match sourcing {
            LockerSourcing::FirstCabinet => self.list_lockers_for_size(room_id, size),
            LockerSourcing::SelectedCabinet => self.list_lockers_for_cabinet(room_id, cabinet, size),
        }
    }

    fn lockers_in(&self, room_id: i64, cabinet: CabinetIndex, size: &str) -> Vec<Locker> {
        let Some(cabinet) = self
            .room(room_id)
            .and_then(|room| room.cabinets.get(cabinet.0))
        else {
            return Vec::new();
        };

        let mut lockers: Vec<Locker> = cabinet.lockers_of_size(size).cloned().collect();
        lockers.sort_by(|a, b| a.locker_name.cmp(&b.locker_name));
        lockers
    }

    /// Найти ячейку по id во всем дереве
    pub fn find_locker(&self, locker_id: i64) -> Option<(LockerLocation, &Locker)> {
        for room_id in &self.room_ids {
            let Some(room) = self.room(*room_id) else {
                continue;
            };
            for cabinet in &room.cabinets {
                for group in &cabinet.size_groups {
                    if let Some(locker) = group.lockers.iter().find(|l| l.locker_id == locker_id) {
                        let location = LockerLocation {
                            room_id: room.room_id,
                            cabinet: cabinet.number(),
                            size: group.size.clone(),
                        };
                        return Some((location, locker));
                    }
                }
            }
        }
        None
    }
}

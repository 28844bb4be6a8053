use serde::{Deserialize, Serialize};

use crate::domain::a001_locker_master::CabinetNumber;

/// Цепочка фильтров комната → кабинет → размер
///
/// Нижестоящий фильтр не может хранить значение без вышестоящего:
/// смена комнаты сбрасывает кабинет и размер, смена кабинета сбрасывает размер.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerFilters {
    room: Option<i64>,
    cabinet: Option<CabinetNumber>,
    size: Option<String>,
}

impl LockerFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(&self) -> Option<i64> {
        self.room
    }

    pub fn cabinet(&self) -> Option<CabinetNumber> {
        self.cabinet
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Все три фильтра заданы
    pub fn is_complete(&self) -> bool {
        self.room.is_some() && self.cabinet.is_some() && self.size.is_some()
    }

    pub fn set_room(&mut self, room: Option<i64>) {
        self.room = room;
        self.cabinet = None;
        self.size = None;
    }

    pub fn set_cabinet(&mut self, cabinet: Option<CabinetNumber>) {
        self.cabinet = if self.room.is_some() { cabinet } else { None };
        self.size = None;
    }

    pub fn set_size(&mut self, size: Option<String>) {
        self.size = if self.cabinet.is_some() { size } else { None };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

use serde::{Deserialize, Serialize};

use super::dto::{LockerMasterResponse, MappedLockerDto, RoomDto};
use crate::enums::LockerStatus;

// ============================================================================
// Cabinet identity
// ============================================================================

/// Позиция кабинета в массиве кабинетов комнаты (0-based)
///
/// Бэкенд не присылает идентификатор кабинета, поэтому идентичность
/// кабинета позиционная. Индекс хранится явно, номер для UI выводится из него.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CabinetIndex(pub usize);

impl CabinetIndex {
    pub fn number(&self) -> CabinetNumber {
        CabinetNumber(self.0 + 1)
    }
}

/// Номер кабинета для UI (1-based, ноль не допускается)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CabinetNumber(usize);

impl TryFrom<usize> for CabinetNumber {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err("cabinet number starts at 1".to_string());
        }
        Ok(Self(value))
    }
}

impl From<CabinetNumber> for usize {
    fn from(number: CabinetNumber) -> Self {
        number.0
    }
}

impl CabinetNumber {
    /// Номер из строки селектора ("1", "2", ...). "0" и мусор дают `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let n = label.trim().parse::<usize>().ok()?;
        Self::try_from(n).ok()
    }

    pub fn value(&self) -> usize {
        self.0
    }

    pub fn index(&self) -> CabinetIndex {
        CabinetIndex(self.0 - 1)
    }

    pub fn label(&self) -> String {
        self.0.to_string()
    }
}

impl std::fmt::Display for CabinetNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Мастер-данные ячеек одного центра: комнаты → кабинеты → размеры → ячейки
///
/// Неизменяемы после построения; при повторной загрузке или смене центра
/// заменяются целиком.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockerMaster {
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i64,
    pub cabinets: Vec<Cabinet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub index: CabinetIndex,
    pub size_groups: Vec<SizeGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeGroup {
    pub size: String,
    pub lockers: Vec<Locker>,
}

/// Ячейка: минимальная единица аренды
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locker {
    pub locker_id: i64,
    pub locker_name: String,
    pub status: LockerStatus,
}

/// Закрепленная ячейка, выбираемая в обход фильтров комнаты/кабинета/размера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedLocker {
    pub locker_id: i64,
    pub locker_name: String,
    pub size: String,
    pub status: LockerStatus,
}

impl LockerMaster {
    /// Построить дерево из ответа бэкенда
    ///
    /// Комнаты всех элементов `master` объединяются в порядке следования.
    pub fn from_response(response: &LockerMasterResponse) -> Self {
        let rooms = response
            .master
            .iter()
            .flat_map(|entry| entry.rooms.iter())
            .map(Room::from_dto)
            .collect();
        Self { rooms }
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Room {
    fn from_dto(dto: &RoomDto) -> Self {
        let cabinets = dto
            .cabinets
            .iter()
            .enumerate()
            .map(|(position, cabinet)| Cabinet {
                index: CabinetIndex(position),
                size_groups: cabinet
                    .size_groups
                    .iter()
                    .map(|group| SizeGroup {
                        size: group.size.clone(),
                        lockers: group
                            .lockers
                            .iter()
                            .map(|l| Locker {
                                locker_id: l.locker_id,
                                locker_name: l.locker_name.clone(),
                                status: l.status.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            room_id: dto.room_id,
            cabinets,
        }
    }

    pub fn cabinet(&self, number: CabinetNumber) -> Option<&Cabinet> {
        self.cabinets.get(number.index().0)
    }
}

impl Cabinet {
    pub fn number(&self) -> CabinetNumber {
        self.index.number()
    }

    /// Все ячейки кабинета с указанной меткой размера (метки могут повторяться)
    pub fn lockers_of_size<'a>(&'a self, size: &'a str) -> impl Iterator<Item = &'a Locker> + 'a {
        self.size_groups
            .iter()
            .filter(move |group| group.size == size)
            .flat_map(|group| group.lockers.iter())
    }
}

impl From<&MappedLockerDto> for ReservedLocker {
    fn from(dto: &MappedLockerDto) -> Self {
        Self {
            locker_id: dto.locker_id,
            locker_name: dto.locker_name.clone(),
            size: dto.size.clone(),
            status: dto.status.clone(),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Статус ячейки
///
/// На проводе передается строкой в нижнем регистре: `"available"`,
/// `"occupied"`, `"maintenance"`. Неизвестные значения сохраняются как
/// `Other` и считаются недоступными для выбора.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LockerStatus {
    Available,
    Occupied,
    Maintenance,
    Other(String),
}

impl LockerStatus {
    /// Получить код статуса (wire-значение)
    pub fn code(&self) -> &str {
        match self {
            LockerStatus::Available => "available",
            LockerStatus::Occupied => "occupied",
            LockerStatus::Maintenance => "maintenance",
            LockerStatus::Other(code) => code.as_str(),
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "available" => LockerStatus::Available,
            "occupied" => LockerStatus::Occupied,
            "maintenance" => LockerStatus::Maintenance,
            _ => LockerStatus::Other(code.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, LockerStatus::Available)
    }

    /// Человекочитаемое название статуса
    pub fn display_name(&self) -> &'static str {
        match self {
            LockerStatus::Available => "Available",
            LockerStatus::Occupied => "Occupied",
            LockerStatus::Maintenance => "Under Maintenance",
            LockerStatus::Other(_) => "Not Available",
        }
    }

    /// Подпись для заблокированной ячейки в сетке (`None` для доступной)
    pub fn unavailable_label(&self) -> Option<&'static str> {
        if self.is_available() {
            None
        } else {
            Some(self.display_name())
        }
    }
}

impl Default for LockerStatus {
    fn default() -> Self {
        LockerStatus::Available
    }
}

impl std::fmt::Display for LockerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for LockerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for LockerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(LockerStatus::from_code(&code))
    }
}

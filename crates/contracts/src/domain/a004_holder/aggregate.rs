use serde::{Deserialize, Serialize};

/// Роль держателя в договоре аренды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderRole {
    Primary,
    Second,
    Third,
}

impl HolderRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            HolderRole::Primary => "Primary holder",
            HolderRole::Second => "Second holder",
            HolderRole::Third => "Third holder",
        }
    }
}

/// Сведения о ячейке основного держателя
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockerInfo {
    pub center: String,
    pub assigned_locker: String,
    pub locker_id: Option<i64>,
    pub locker_size: String,
}

impl LockerInfo {
    /// Часть сведений, которую видят второй и третий держатели (без размера)
    pub fn mirrored(&self) -> MirroredLockerInfo {
        MirroredLockerInfo {
            center: self.center.clone(),
            assigned_locker: self.assigned_locker.clone(),
            locker_id: self.locker_id,
        }
    }
}

/// Сведения о ячейке у второго/третьего держателя
///
/// Та же физическая ячейка, что у основного держателя.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirroredLockerInfo {
    pub center: String,
    pub assigned_locker: String,
    pub locker_id: Option<i64>,
}

/// Данные аренды основного держателя (экран RentDetails)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDetails {
    pub locker_no: String,
    pub locker_id: Option<i64>,
    pub locker_size: String,
}

/// Второй или третий держатель
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointHolder {
    pub role: HolderRole,
    pub customer_id: Option<i64>,
    pub(crate) locker_info: MirroredLockerInfo,
}

impl JointHolder {
    pub fn new(role: HolderRole) -> Self {
        Self {
            role,
            customer_id: None,
            locker_info: MirroredLockerInfo::default(),
        }
    }

    pub fn locker_info(&self) -> &MirroredLockerInfo {
        &self.locker_info
    }
}

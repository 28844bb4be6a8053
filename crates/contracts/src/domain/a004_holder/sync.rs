//! Фиксация выбранной ячейки и синхронизация держателей
//!
//! Сведения о ячейке основного держателя принадлежат `LockerAssignmentOwner`.
//! Второй и третий держатели реализуют `LockerInfoMirror` и получают
//! копию при каждом изменении, а не только в момент назначения. Изменить
//! сведения основного держателя в обход рассылки нельзя.

use serde::{Deserialize, Serialize};

use super::aggregate::{HolderRole, JointHolder, LockerInfo, MirroredLockerInfo, RentDetails};
use crate::domain::a003_locker_selection::SelectionStateMachine;

/// Итог назначения ячейки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub locker_number: String,
    pub locker_id: i64,
    pub size: String,
}

/// Получатель сведений о ячейке основного держателя
///
/// Виден только внутри crate: писать в зеркало может лишь `HolderForms`.
pub(crate) trait LockerInfoMirror {
    fn mirror_locker_info(&mut self, info: &MirroredLockerInfo);
}

impl LockerInfoMirror for JointHolder {
    fn mirror_locker_info(&mut self, info: &MirroredLockerInfo) {
        self.locker_info = info.clone();
    }
}

/// Основной держатель: владелец сведений о ячейке и данных аренды
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockerAssignmentOwner {
    rent_details: RentDetails,
    locker_info: LockerInfo,
}

impl LockerAssignmentOwner {
    pub fn rent_details(&self) -> &RentDetails {
        &self.rent_details
    }

    pub fn locker_info(&self) -> &LockerInfo {
        &self.locker_info
    }

    /// Обновить сведения о ячейке и разослать их всем зеркалам
    pub(crate) fn update_locker_info<'m, I>(&mut self, info: LockerInfo, mirrors: I)
    where
        I: IntoIterator<Item = &'m mut dyn LockerInfoMirror>,
    {
        self.locker_info = info;
        let mirrored = self.locker_info.mirrored();
        for mirror in mirrors {
            mirror.mirror_locker_info(&mirrored);
        }
    }

    fn set_rent_details(&mut self, rent_details: RentDetails) {
        self.rent_details = rent_details;
    }
}

/// Формы держателей одной аренды
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderForms {
    primary: LockerAssignmentOwner,
    second: Option<JointHolder>,
    third: Option<JointHolder>,
}

impl HolderForms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> &LockerAssignmentOwner {
        &self.primary
    }

    pub fn holder(&self, role: HolderRole) -> Option<&JointHolder> {
        match role {
            HolderRole::Primary => None,
            HolderRole::Second => self.second.as_ref(),
            HolderRole::Third => self.third.as_ref(),
        }
    }

    /// Добавить второго/третьего держателя; он сразу получает текущие сведения
    pub fn add_holder(&mut self, role: HolderRole) {
        let mirrored = self.primary.locker_info().mirrored();
        let slot = match role {
            HolderRole::Primary => return,
            HolderRole::Second => &mut self.second,
            HolderRole::Third => &mut self.third,
        };
        let holder = slot.get_or_insert_with(|| JointHolder::new(role));
        holder.mirror_locker_info(&mirrored);
    }

    pub fn remove_holder(&mut self, role: HolderRole) {
        match role {
            HolderRole::Primary => {}
            HolderRole::Second => self.second = None,
            HolderRole::Third => self.third = None,
        }
    }

    /// Единственный путь изменения сведений основного держателя
    pub fn set_primary_locker_info(&mut self, info: LockerInfo) {
        let mirrors = self
            .second
            .iter_mut()
            .chain(self.third.iter_mut())
            .map(|holder| holder as &mut dyn LockerInfoMirror);
        self.primary.update_locker_info(info, mirrors);
    }

    /// Смена центра на экране клиента
    pub fn set_primary_center(&mut self, center: impl Into<String>) {
        let mut info = self.primary.locker_info().clone();
        info.center = center.into();
        self.set_primary_locker_info(info);
    }

    /// Записать назначенную ячейку в данные аренды и сведения основного держателя
    pub fn apply_assignment(&mut self, center: &str, result: &AssignmentResult) {
        self.primary.set_rent_details(RentDetails {
            locker_no: result.locker_number.clone(),
            locker_id: Some(result.locker_id),
            locker_size: result.size.clone(),
        });
        self.set_primary_locker_info(LockerInfo {
            center: center.to_string(),
            assigned_locker: result.locker_number.clone(),
            locker_id: Some(result.locker_id),
            locker_size: result.size.clone(),
        });
    }

    /// Сброс формы: держатели остаются, сведения о ячейке очищаются
    pub fn reset(&mut self) {
        self.primary.set_rent_details(RentDetails::default());
        self.set_primary_locker_info(LockerInfo::default());
    }
}

/// Подтвердить выбор ячейки
///
/// Без выбора ничего не делает и возвращает `None`. После успешного
/// назначения автомат выбора остается в состоянии `None`.
pub fn assign(
    selection: &mut SelectionStateMachine,
    center: &str,
    forms: &mut HolderForms,
) -> Option<AssignmentResult> {
    let selected = selection.take()?;
    let result = AssignmentResult {
        locker_number: selected.locker_number,
        locker_id: selected.locker_id,
        size: selected.size,
    };
    forms.apply_assignment(center, &result);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_locker_master::Locker;
    use crate::domain::a003_locker_selection::SelectionState;
    use crate::enums::LockerStatus;
    use serde_json::json;

    fn forms_with_all_holders() -> HolderForms {
        let mut forms = HolderForms::new();
        forms.add_holder(HolderRole::Second);
        forms.add_holder(HolderRole::Third);
        forms
    }

    #[test]
    fn test_primary_change_is_mirrored_without_size() {
        let mut forms = forms_with_all_holders();
        forms.set_primary_locker_info(LockerInfo {
            center: "C1".into(),
            assigned_locker: "B-5".into(),
            locker_id: Some(42),
            locker_size: "Large".into(),
        });

        let expected = json!({"center": "C1", "assignedLocker": "B-5", "lockerId": 42});
        for role in [HolderRole::Second, HolderRole::Third] {
            let info = forms.holder(role).unwrap().locker_info();
            assert_eq!(serde_json::to_value(info).unwrap(), expected);
        }
    }

    #[test]
    fn test_mirrors_follow_every_change() {
        let mut forms = forms_with_all_holders();
        forms.set_primary_center("C1");
        assert_eq!(forms.holder(HolderRole::Second).unwrap().locker_info().center, "C1");

        forms.set_primary_center("C2");
        assert_eq!(forms.holder(HolderRole::Third).unwrap().locker_info().center, "C2");
    }

    fn assert_mirrors_follow_primary(forms: &HolderForms) {
        let expected = forms.primary().locker_info().mirrored();
        for role in [HolderRole::Second, HolderRole::Third] {
            if let Some(holder) = forms.holder(role) {
                assert_eq!(holder.locker_info(), &expected, "{:?}", role);
            }
        }
    }

    #[test]
    fn test_mirrors_never_diverge_from_primary() {
        let mut forms = HolderForms::new();
        forms.add_holder(HolderRole::Second);
        forms.set_primary_locker_info(LockerInfo {
            center: "C1".into(),
            assigned_locker: "B-5".into(),
            locker_id: Some(42),
            locker_size: "Large".into(),
        });
        assert_mirrors_follow_primary(&forms);

        forms.add_holder(HolderRole::Third);
        assert_mirrors_follow_primary(&forms);

        forms.set_primary_center("C9");
        assert_mirrors_follow_primary(&forms);

        forms.remove_holder(HolderRole::Second);
        forms.add_holder(HolderRole::Second);
        assert_mirrors_follow_primary(&forms);

        forms.apply_assignment(
            "7",
            &AssignmentResult {
                locker_number: "Z-9".into(),
                locker_id: 7,
                size: "Small".into(),
            },
        );
        assert_mirrors_follow_primary(&forms);

        forms.reset();
        assert_mirrors_follow_primary(&forms);
    }

    #[test]
    fn test_added_holder_receives_current_info() {
        let mut forms = HolderForms::new();
        forms.set_primary_locker_info(LockerInfo {
            center: "C1".into(),
            assigned_locker: "B-5".into(),
            locker_id: Some(42),
            locker_size: "Large".into(),
        });

        forms.add_holder(HolderRole::Second);
        let info = forms.holder(HolderRole::Second).unwrap().locker_info();
        assert_eq!(info.assigned_locker, "B-5");
        assert_eq!(info.locker_id, Some(42));
        assert!(forms.holder(HolderRole::Third).is_none());
    }

    #[test]
    fn test_assign_writes_primary_and_mirrors() {
        let mut forms = forms_with_all_holders();
        let mut machine = SelectionStateMachine::new();
        machine.click(
            &Locker {
                locker_id: 99,
                locker_name: "M-01".into(),
                status: LockerStatus::Available,
            },
            "Medium",
        );

        let result = assign(&mut machine, "7", &mut forms).unwrap();

        assert_eq!(
            result,
            AssignmentResult {
                locker_number: "M-01".into(),
                locker_id: 99,
                size: "Medium".into(),
            }
        );
        assert_eq!(machine.state(), &SelectionState::None);

        let rent = forms.primary().rent_details();
        assert_eq!(rent.locker_no, "M-01");
        assert_eq!(rent.locker_id, Some(99));
        assert_eq!(rent.locker_size, "Medium");

        let second = forms.holder(HolderRole::Second).unwrap().locker_info();
        assert_eq!(second.center, "7");
        assert_eq!(second.assigned_locker, "M-01");
        assert_eq!(second.locker_id, Some(99));
    }

    #[test]
    fn test_assign_without_selection_is_noop() {
        let mut forms = forms_with_all_holders();
        forms.set_primary_center("C1");
        let before = forms.clone();

        let mut machine = SelectionStateMachine::new();
        assert!(assign(&mut machine, "C1", &mut forms).is_none());
        assert_eq!(forms, before);
    }

    #[test]
    fn test_reset_clears_all_holders() {
        let mut forms = forms_with_all_holders();
        forms.apply_assignment(
            "7",
            &AssignmentResult {
                locker_number: "M-01".into(),
                locker_id: 99,
                size: "Medium".into(),
            },
        );

        forms.reset();
        assert_eq!(forms.primary().rent_details(), &RentDetails::default());
        assert_eq!(
            forms.holder(HolderRole::Second).unwrap().locker_info(),
            &MirroredLockerInfo::default()
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::a001_locker_master::{Locker, ReservedLocker};
use crate::enums::LockerStatus;

/// Выбранная ячейка (живет только в рамках сессии модального окна)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub locker_number: String,
    pub locker_id: i64,
    pub size: String,
    pub status: LockerStatus,
}

impl Selection {
    pub fn from_locker(locker: &Locker, size: &str) -> Self {
        Self {
            locker_number: locker.locker_name.clone(),
            locker_id: locker.locker_id,
            size: size.to_string(),
            status: locker.status.clone(),
        }
    }

    pub fn from_reserved(reserved: &ReservedLocker) -> Self {
        Self {
            locker_number: reserved.locker_name.clone(),
            locker_id: reserved.locker_id,
            size: reserved.size.clone(),
            status: reserved.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    None,
    Selected(Selection),
}

/// Результат клика по ячейке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    Deselected,
    Ignored,
}

/// Автомат выбора ячейки: `None` ⇄ `Selected(locker)`
///
/// Начальное состояние `None`, конечного нет.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStateMachine {
    state: SelectionState,
}

impl SelectionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&Selection> {
        match &self.state {
            SelectionState::Selected(selection) => Some(selection),
            SelectionState::None => None,
        }
    }

    pub fn is_selected(&self, locker_number: &str) -> bool {
        self.selected()
            .map(|s| s.locker_number == locker_number)
            .unwrap_or(false)
    }

    /// Клик по ячейке сетки
    ///
    /// Недоступные ячейки игнорируются, повторный клик по выбранной снимает выбор,
    /// клик по другой доступной ячейке сразу переключает выбор.
    pub fn click(&mut self, locker: &Locker, size: &str) -> ClickOutcome {
        if !locker.status.is_available() {
            return ClickOutcome::Ignored;
        }

        if self.is_selected(&locker.locker_name) {
            self.state = SelectionState::None;
            return ClickOutcome::Deselected;
        }

        self.state = SelectionState::Selected(Selection::from_locker(locker, size));
        ClickOutcome::Selected
    }

    /// Клик по закрепленной ячейке: выбор без проверки статуса
    pub fn reserved_click(&mut self, reserved: &ReservedLocker) -> ClickOutcome {
        self.state = SelectionState::Selected(Selection::from_reserved(reserved));
        ClickOutcome::Selected
    }

    /// Смена любого фильтра (комната, кабинет, размер) сбрасывает выбор
    pub fn filter_change(&mut self) {
        self.state = SelectionState::None;
    }

    /// Принудительно установить выбор (предзаполнение при редактировании)
    pub fn force_select(&mut self, selection: Selection) {
        self.state = SelectionState::Selected(selection);
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::None;
    }

    /// Забрать выбор, оставив автомат в `None`
    pub fn take(&mut self) -> Option<Selection> {
        match std::mem::take(&mut self.state) {
            SelectionState::Selected(selection) => Some(selection),
            SelectionState::None => None,
        }
    }
}

//! Сессия модального окна назначения ячейки
//!
//! Сессия создается при открытии окна для конкретного центра и владеет
//! загруженными мастер-данными. Закрытие окна уничтожает дерево и выбор;
//! ответы на запросы, отправленные до закрытия или до повторной загрузки,
//! отбрасываются по несовпадению `FetchTicket`.

use uuid::Uuid;

use super::filters::LockerFilters;
use super::state_machine::{ClickOutcome, Selection, SelectionStateMachine};
use crate::domain::a001_locker_master::dto::{LockerDetailsResponse, LockerMasterResponse};
use crate::domain::a001_locker_master::{
    CabinetIndex, CabinetNumber, Locker, LockerMasterIndex, LockerSourcing, ReservedLocker,
};
use crate::domain::a002_locker_grid::{layout, GridLayout, DEFAULT_GRID_COLUMNS};
use crate::domain::a004_holder::{assign, AssignmentResult, HolderForms};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Квитанция на загрузку мастер-данных
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub session_id: Uuid,
    pub center_id: i64,
    attempt: u32,
}

#[derive(Debug, Clone)]
pub struct AssignLockerSession {
    session_id: Uuid,
    center_id: Option<i64>,
    attempt: u32,
    is_open: bool,
    load_state: LoadState,
    index: Option<LockerMasterIndex>,
    filters: LockerFilters,
    selection: SelectionStateMachine,
    sourcing: LockerSourcing,
    columns: usize,
    /// Пользователь менял фильтры или выбор после загрузки
    user_touched: bool,
}

impl AssignLockerSession {
    /// Открыть сессию для центра (центр может быть еще не выбран)
    pub fn open(center_id: Option<i64>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            center_id,
            attempt: 0,
            is_open: true,
            load_state: LoadState::Idle,
            index: None,
            filters: LockerFilters::new(),
            selection: SelectionStateMachine::new(),
            user_touched: false,
            sourcing: LockerSourcing::default(),
            columns: DEFAULT_GRID_COLUMNS,
        }
    }

    pub fn with_sourcing(mut self, sourcing: LockerSourcing) -> Self {
        self.sourcing = sourcing;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn center_id(&self) -> Option<i64> {
        self.center_id
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn filters(&self) -> &LockerFilters {
        &self.filters
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selected()
    }

    /// Селекторы активны только после успешной загрузки
    pub fn is_interactive(&self) -> bool {
        self.is_open && self.load_state == LoadState::Loaded
    }

    pub fn can_assign(&self) -> bool {
        self.is_interactive() && self.selection.selected().is_some()
    }

    // ------------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------------

    /// Начать загрузку мастер-данных
    ///
    /// Без центра сессия сразу переходит в `Failed` и квитанция не выдается.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.is_open {
            return None;
        }

        let Some(center_id) = self.center_id else {
            self.load_state = LoadState::Failed("Locker center is not selected".to_string());
            return None;
        };

        self.attempt += 1;
        self.index = None;
        self.filters.clear();
        self.selection.reset();
        self.user_touched = false;
        self.load_state = LoadState::Loading;

        Some(FetchTicket {
            session_id: self.session_id,
            center_id,
            attempt: self.attempt,
        })
    }

    /// Повторная загрузка с нуля (ручная кнопка "Retry")
    pub fn retry(&mut self) -> Option<FetchTicket> {
        self.begin_fetch()
    }

    /// Применить результат загрузки; `false`, если результат устарел
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<LockerMasterResponse, String>,
    ) -> bool {
        let is_current = self.is_open
            && ticket.session_id == self.session_id
            && ticket.attempt == self.attempt
            && self.load_state == LoadState::Loading;
        if !is_current {
            return false;
        }

        match result {
            Ok(response) => {
                self.index = Some(LockerMasterIndex::from_response(&response));
                self.load_state = LoadState::Loaded;
            }
            Err(message) => {
                self.index = None;
                self.load_state = LoadState::Failed(message);
            }
        }
        true
    }

    /// Закрыть окно: дерево, фильтры и выбор уничтожаются
    pub fn close(&mut self) {
        self.is_open = false;
        self.index = None;
        self.filters.clear();
        self.selection.reset();
        self.user_touched = false;
        self.load_state = LoadState::Idle;
    }

    fn loaded_index(&self) -> Option<&LockerMasterIndex> {
        if self.is_interactive() {
            self.index.as_ref()
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Опции селекторов
    // ------------------------------------------------------------------------

    pub fn rooms(&self) -> Vec<i64> {
        self.loaded_index()
            .map(LockerMasterIndex::list_rooms)
            .unwrap_or_default()
    }

    pub fn cabinets(&self) -> Vec<String> {
        match (self.loaded_index(), self.filters.room()) {
            (Some(index), Some(room)) => index.list_cabinets(room),
            _ => Vec::new(),
        }
    }

    pub fn sizes(&self) -> Vec<String> {
        match (self.loaded_index(), self.filters.room(), self.filters.cabinet()) {
            (Some(index), Some(room), Some(cabinet)) => index.list_sizes(room, cabinet),
            _ => Vec::new(),
        }
    }

    pub fn reserved_lockers(&self) -> &[ReservedLocker] {
        self.loaded_index()
            .map(LockerMasterIndex::reserved_lockers)
            .unwrap_or(&[])
    }

    /// Ячейки текущего среза фильтров в порядке сетки
    pub fn visible_lockers(&self) -> Vec<Locker> {
        let index = self.loaded_index();
        match (
            index,
            self.filters.room(),
            self.filters.cabinet(),
            self.filters.size(),
        ) {
            (Some(index), Some(room), Some(cabinet), Some(size)) => {
                index.list_lockers(room, cabinet, size, self.sourcing)
            }
            _ => Vec::new(),
        }
    }

    pub fn visible_grid(&self) -> GridLayout {
        layout(&self.visible_lockers(), self.columns)
    }

    // ------------------------------------------------------------------------
    // Фильтры
    // ------------------------------------------------------------------------

    /// Выбор комнаты; неизвестная комната сбрасывает фильтр
    pub fn select_room(&mut self, room: Option<i64>) {
        let room = room.filter(|id| self.rooms().contains(id));
        self.user_touched = true;
        self.filters.set_room(room);
        self.selection.filter_change();
    }

    pub fn select_cabinet(&mut self, cabinet: Option<CabinetNumber>) {
        let cabinet = cabinet.filter(|number| self.cabinets().contains(&number.label()));
        self.user_touched = true;
        self.filters.set_cabinet(cabinet);
        self.selection.filter_change();
    }

    pub fn select_size(&mut self, size: Option<String>) {
        let size = size.filter(|s| self.sizes().contains(s));
        self.user_touched = true;
        self.filters.set_size(size);
        self.selection.filter_change();
    }

    // ------------------------------------------------------------------------
    // Выбор ячейки
    // ------------------------------------------------------------------------

    /// Клик по ячейке сетки; ячейки вне текущего среза игнорируются
    pub fn click_locker(&mut self, locker_id: i64) -> ClickOutcome {
        let Some(size) = self.filters.size().map(str::to_string) else {
            return ClickOutcome::Ignored;
        };
        let Some(locker) = self
            .visible_lockers()
            .into_iter()
            .find(|l| l.locker_id == locker_id)
        else {
            return ClickOutcome::Ignored;
        };

        self.user_touched = true;
        self.selection.click(&locker, &size)
    }

    pub fn click_reserved(&mut self, locker_id: i64) -> ClickOutcome {
        let Some(reserved) = self
            .loaded_index()
            .and_then(|index| index.find_reserved(locker_id))
            .cloned()
        else {
            return ClickOutcome::Ignored;
        };

        self.user_touched = true;
        self.selection.reserved_click(&reserved)
    }

    /// Предвыбор ячейки клиента при редактировании
    ///
    /// Фильтры выставляются на место ячейки в дереве, сама ячейка выбирается
    /// без проверки статуса (она уже принадлежит клиенту). Если пользователь
    /// уже менял фильтры или выбор, предвыбор не применяется. Ячейка вне
    /// первого кабинета переключает сессию на `SelectedCabinet`, иначе она
    /// не попала бы в сетку.
    pub fn preselect(&mut self, details: &LockerDetailsResponse) -> bool {
        if self.user_touched {
            return false;
        }
        if details.locker_center_id.is_some() && details.locker_center_id != self.center_id {
            return false;
        }
        let Some(locker_id) = details.locker_id else {
            return false;
        };
        let Some((location, locker)) = self
            .loaded_index()
            .and_then(|index| index.find_locker(locker_id))
            .map(|(location, locker)| (location, locker.clone()))
        else {
            return false;
        };

        if location.cabinet.index() != CabinetIndex(0) {
            self.sourcing = LockerSourcing::SelectedCabinet;
        }
        self.filters.set_room(Some(location.room_id));
        self.filters.set_cabinet(Some(location.cabinet));
        self.filters.set_size(Some(location.size.clone()));
        self.selection
            .force_select(Selection::from_locker(&locker, &location.size));
        true
    }

    // ------------------------------------------------------------------------
    // Назначение
    // ------------------------------------------------------------------------

    /// Подтвердить выбор: записать в формы держателей и закрыть окно
    ///
    /// Без выбора (кнопка неактивна) ничего не делает.
    pub fn assign(&mut self, forms: &mut HolderForms) -> Option<AssignmentResult> {
        if !self.can_assign() {
            return None;
        }
        let center = self.center_id?.to_string();
        let result = assign(&mut self.selection, &center, forms)?;
        self.close();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_locker_master::index::fixtures::center_7;
    use crate::domain::a004_holder::HolderRole;
    use crate::domain::a003_locker_selection::SelectionState;

    fn cabinet(label: &str) -> Option<CabinetNumber> {
        CabinetNumber::from_label(label)
    }

    fn loaded_center_7() -> AssignLockerSession {
        let mut session = AssignLockerSession::open(Some(7));
        let ticket = session.begin_fetch().unwrap();
        assert!(session.apply_fetch(ticket, Ok(center_7())));
        session
    }

    fn names(lockers: &[Locker]) -> Vec<String> {
        lockers.iter().map(|l| l.locker_name.clone()).collect()
    }

    #[test]
    fn test_selectors_empty_until_loaded() {
        let mut session = AssignLockerSession::open(Some(7));
        assert!(session.rooms().is_empty());

        let _ticket = session.begin_fetch().unwrap();
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(!session.is_interactive());
        assert!(session.rooms().is_empty());
    }

    #[test]
    fn test_missing_center_fails_without_ticket() {
        let mut session = AssignLockerSession::open(None);
        assert!(session.begin_fetch().is_none());
        assert!(matches!(session.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_fetch_failure_then_retry() {
        let mut session = AssignLockerSession::open(Some(7));
        let ticket = session.begin_fetch().unwrap();
        assert!(session.apply_fetch(ticket, Err("HTTP 500".into())));
        assert_eq!(session.load_state(), &LoadState::Failed("HTTP 500".into()));
        assert!(session.rooms().is_empty());

        let retry = session.retry().unwrap();
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(session.apply_fetch(retry, Ok(center_7())));
        assert_eq!(session.rooms(), vec![1]);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut session = AssignLockerSession::open(Some(7));
        let first = session.begin_fetch().unwrap();
        let second = session.retry().unwrap();

        assert!(!session.apply_fetch(first, Ok(center_7())));
        assert_eq!(session.load_state(), &LoadState::Loading);
        assert!(session.apply_fetch(second, Ok(center_7())));

        let mut other = AssignLockerSession::open(Some(7));
        let foreign = other.begin_fetch().unwrap();
        assert!(!session.apply_fetch(foreign, Ok(center_7())));
    }

    #[test]
    fn test_closed_session_discards_results() {
        let mut session = AssignLockerSession::open(Some(7));
        let ticket = session.begin_fetch().unwrap();
        session.close();

        assert!(!session.apply_fetch(ticket, Ok(center_7())));
        assert!(session.rooms().is_empty());
        assert!(session.begin_fetch().is_none());
    }

    #[test]
    fn test_room_change_clears_selection() {
        let mut session = loaded_center_7();
        session.select_room(Some(1));
        session.select_cabinet(cabinet("1"));
        session.select_size(Some("Medium".into()));
        assert_eq!(session.click_locker(99), ClickOutcome::Selected);

        session.select_room(Some(1));
        assert!(session.selection().is_none());
        assert_eq!(session.filters().cabinet(), None);
        assert_eq!(session.filters().size(), None);
        assert!(session.visible_lockers().is_empty());
    }

    #[test]
    fn test_cabinet_and_size_changes_clear_selection() {
        let mut session = loaded_center_7();
        session.select_room(Some(1));
        session.select_cabinet(cabinet("1"));
        session.select_size(Some("Medium".into()));
        session.click_locker(99);

        session.select_size(Some("Small".into()));
        assert!(session.selection().is_none());

        session.click_locker(11);
        assert!(session.selection().is_some());
        session.select_cabinet(cabinet("2"));
        assert!(session.selection().is_none());
        assert_eq!(session.filters().size(), None);
    }

    #[test]
    fn test_unknown_filter_values_are_rejected() {
        let mut session = loaded_center_7();
        session.select_room(Some(42));
        assert_eq!(session.filters().room(), None);

        session.select_room(Some(1));
        session.select_cabinet(cabinet("3"));
        assert_eq!(session.filters().cabinet(), None);

        session.select_cabinet(cabinet("1"));
        session.select_size(Some("Huge".into()));
        assert_eq!(session.filters().size(), None);
    }

    #[test]
    fn test_occupied_click_is_ignored() {
        let mut session = loaded_center_7();
        session.select_room(Some(1));
        session.select_cabinet(cabinet("1"));
        session.select_size(Some("Small".into()));

        assert_eq!(session.click_locker(10), ClickOutcome::Ignored);
        assert!(session.selection().is_none());
        assert!(!session.can_assign());
    }

    #[test]
    fn test_reserved_locker_selected_outside_filters() {
        let mut session = loaded_center_7();
        assert_eq!(session.reserved_lockers().len(), 1);

        assert_eq!(session.click_reserved(500), ClickOutcome::Selected);
        assert_eq!(session.selection().map(|s| s.locker_number.as_str()), Some("R-01"));
        assert!(session.can_assign());

        assert_eq!(session.click_reserved(1), ClickOutcome::Ignored);
    }

    #[test]
    fn test_end_to_end_first_cabinet_quirk() {
        let mut session = loaded_center_7();
        let mut forms = HolderForms::new();
        forms.add_holder(HolderRole::Second);

        session.select_room(Some(1));
        assert_eq!(session.cabinets(), vec!["1", "2"]);
        session.select_cabinet(cabinet("2"));
        assert_eq!(session.sizes(), vec!["Medium", "Small", "Large"]);
        session.select_size(Some("Medium".into()));

        let grid = session.visible_grid();
        let shown: Vec<String> = grid.cells().map(|c| c.locker.locker_name.clone()).collect();
        assert_eq!(shown, vec!["M-01", "M-02", "M-10"]);
        assert_eq!(grid.cell_at(1, 3).unwrap().locker.status.unavailable_label(), Some("Under Maintenance"));

        assert_eq!(session.click_locker(99), ClickOutcome::Selected);
        assert!(session.can_assign());

        let result = session.assign(&mut forms).unwrap();
        assert_eq!(
            result,
            AssignmentResult {
                locker_number: "M-01".into(),
                locker_id: 99,
                size: "Medium".into(),
            }
        );
        assert!(!session.is_open());
        assert!(session.selection().is_none());
        assert_eq!(forms.primary().rent_details().locker_no, "M-01");
        assert_eq!(
            forms.holder(HolderRole::Second).unwrap().locker_info().locker_id,
            Some(99)
        );
    }

    #[test]
    fn test_selected_cabinet_sourcing() {
        let mut session = AssignLockerSession::open(Some(7))
            .with_sourcing(LockerSourcing::SelectedCabinet)
            .with_columns(2);
        let ticket = session.begin_fetch().unwrap();
        session.apply_fetch(ticket, Ok(center_7()));

        session.select_room(Some(1));
        session.select_cabinet(cabinet("2"));
        session.select_size(Some("Small".into()));

        assert_eq!(names(&session.visible_lockers()), vec!["X-02", "X-03"]);
        assert_eq!(session.visible_grid().row_count(), 1);
    }

    #[test]
    fn test_assign_without_selection_is_noop() {
        let mut session = loaded_center_7();
        let mut forms = HolderForms::new();

        assert!(session.assign(&mut forms).is_none());
        assert!(session.is_open());
        assert_eq!(forms, HolderForms::new());
    }

    #[test]
    fn test_preselect_existing_assignment() {
        let mut session = loaded_center_7();
        let details = LockerDetailsResponse {
            customer_id: 3,
            locker_center_id: Some(7),
            locker_id: Some(203),
            locker_name: Some("X-03".into()),
            size: Some("Small".into()),
        };

        assert!(session.preselect(&details));
        assert_eq!(session.filters().room(), Some(1));
        assert_eq!(session.filters().cabinet(), cabinet("2"));
        assert_eq!(session.filters().size(), Some("Small"));
        assert_eq!(session.selection().map(|s| s.locker_id), Some(203));

        let other_center = LockerDetailsResponse {
            locker_center_id: Some(8),
            ..details
        };
        assert!(!session.preselect(&other_center));
    }

    fn customer_details(locker_id: i64) -> LockerDetailsResponse {
        LockerDetailsResponse {
            customer_id: 3,
            locker_center_id: Some(7),
            locker_id: Some(locker_id),
            locker_name: None,
            size: None,
        }
    }

    #[test]
    fn test_late_preselect_keeps_user_choice() {
        let mut session = loaded_center_7();
        session.select_room(Some(1));
        session.select_cabinet(cabinet("1"));
        session.select_size(Some("Medium".into()));
        assert_eq!(session.click_locker(99), ClickOutcome::Selected);

        assert!(!session.preselect(&customer_details(203)));
        assert_eq!(session.selection().map(|s| s.locker_number.as_str()), Some("M-01"));
        assert_eq!(session.filters().cabinet(), cabinet("1"));
        assert_eq!(session.filters().size(), Some("Medium"));
    }

    #[test]
    fn test_late_preselect_after_filter_only_is_skipped() {
        let mut session = loaded_center_7();
        session.select_room(Some(1));

        assert!(!session.preselect(&customer_details(99)));
        assert!(session.selection().is_none());
        assert_eq!(session.filters().cabinet(), None);
    }

    #[test]
    fn test_reload_allows_preselect_again() {
        let mut session = loaded_center_7();
        session.click_reserved(500);

        let ticket = session.retry().unwrap();
        assert!(session.apply_fetch(ticket, Ok(center_7())));
        assert!(session.preselect(&customer_details(99)));
        assert_eq!(session.selection().map(|s| s.locker_id), Some(99));
    }

    #[test]
    fn test_preselect_outside_first_cabinet_is_visible() {
        let mut session = loaded_center_7();
        assert!(session.preselect(&customer_details(203)));

        let visible = session.visible_lockers();
        assert!(visible.iter().any(|l| l.locker_id == 203));
        assert_eq!(names(&visible), vec!["X-02", "X-03"]);
    }

    #[test]
    fn test_preselect_in_first_cabinet_keeps_default_sourcing() {
        let mut session = loaded_center_7();
        assert!(session.preselect(&customer_details(99)));

        assert_eq!(names(&session.visible_lockers()), vec!["M-01", "M-02", "M-10"]);
        assert_eq!(session.selection().map(|s| s.locker_number.as_str()), Some("M-01"));
    }

    #[test]
    fn test_close_tears_down() {
        let mut session = loaded_center_7();
        session.click_reserved(500);
        session.close();

        assert!(session.selection().is_none());
        assert!(session.rooms().is_empty());
        assert!(session.reserved_lockers().is_empty());
        assert!(matches!(
            session.selection.state(),
            SelectionState::None
        ));
    }
}

use contracts::domain::a004_holder::HolderForms;
use leptos::prelude::*;

/// Формы держателей текущей аренды, общие для экранов CustomerInfo и RentDetails
///
/// Все изменения идут через `HolderForms`, который сам рассылает сведения
/// о ячейке второму и третьему держателю.
#[derive(Clone, Copy)]
pub struct HolderFormStore {
    pub forms: RwSignal<HolderForms>,
}

impl HolderFormStore {
    pub fn new() -> Self {
        Self {
            forms: RwSignal::new(HolderForms::new()),
        }
    }
}

impl Default for HolderFormStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_holder_forms() -> HolderFormStore {
    let store = HolderFormStore::new();
    provide_context(store);
    store
}

pub fn use_holder_forms() -> HolderFormStore {
    use_context::<HolderFormStore>().expect("HolderFormStore not found in component tree")
}

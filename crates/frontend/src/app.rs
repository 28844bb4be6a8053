use crate::domain::a004_holder::store::provide_holder_forms;
use crate::domain::a004_holder::ui::rent_details::RentDetailsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Holder forms are shared by every screen of the rent flow.
    provide_holder_forms();

    view! {
        <main class="app-main">
            <RentDetailsPage />
        </main>
    }
}

use contracts::domain::a004_holder::{AssignmentResult, HolderRole};
use leptos::prelude::*;

use crate::domain::a003_locker_selection::ui::assign_locker::AssignLockerModal;
use crate::domain::a004_holder::store::{use_holder_forms, HolderFormStore};
use crate::shared::icons::icon;
use crate::shared::logger::log_event;
use crate::system::auth::storage;

/// Экран данных аренды: основной держатель, совместные держатели и назначение ячейки
#[component]
pub fn RentDetailsPage() -> impl IntoView {
    let store = use_holder_forms();
    let show_modal = RwSignal::new(false);
    let customer_id = RwSignal::new(String::new());
    let has_token = RwSignal::new(storage::has_access_token());
    let token_input = RwSignal::new(String::new());

    let center = Signal::derive(move || {
        store
            .forms
            .with(|f| f.primary().locker_info().center.clone())
    });

    let on_assigned = Callback::new(move |result: AssignmentResult| {
        log::info!("Locker {} assigned", result.locker_number);
        show_modal.set(false);
    });
    let on_close = Callback::new(move |_| show_modal.set(false));

    let save_token = move |_| {
        let token = token_input.get_untracked();
        storage::save_access_token(token.trim());
        has_token.set(storage::has_access_token());
        token_input.set(String::new());
    };
    let clear_token = move |_| {
        storage::clear_tokens();
        has_token.set(false);
    };

    let reset = move |_| {
        store.forms.update(|f| f.reset());
        log_event("locker_assignment", "Rent form reset");
    };

    view! {
        <div class="details-container rent-details">
            <div class="details-header">
                <h3>"Rent Details"</h3>
            </div>

            <div class="details-form">
                {move || if has_token.get() {
                    view! {
                        <div class="form-group auth-status">
                            <span>"Signed in"</span>
                            <button class="btn btn-secondary" on:click=clear_token>"Sign out"</button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="form-group auth-status">
                            <label for="access_token">"Access token"</label>
                            <input
                                type="password"
                                id="access_token"
                                prop:value=move || token_input.get()
                                on:input=move |ev| token_input.set(event_target_value(&ev))
                            />
                            <button class="btn btn-secondary" on:click=save_token>"Save"</button>
                        </div>
                    }.into_any()
                }}

                <div class="form-group">
                    <label for="center">"Locker center"</label>
                    <input
                        type="text"
                        id="center"
                        prop:value=move || center.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            store.forms.update(|f| f.set_primary_center(value.trim()));
                        }
                        placeholder="Center id"
                    />
                </div>

                <div class="form-group">
                    <label for="customer_id">"Customer id"</label>
                    <input
                        type="text"
                        id="customer_id"
                        prop:value=move || customer_id.get()
                        on:input=move |ev| customer_id.set(event_target_value(&ev))
                        placeholder="Optional"
                    />
                </div>

                <PrimaryRentSummary store=store />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !has_token.get()
                    on:click=move |_| show_modal.set(true)
                >
                    {icon("lock")}
                    "Assign Locker"
                </button>
                <button class="btn btn-secondary" on:click=reset>
                    "Reset"
                </button>
            </div>

            <JointHolderCard store=store role=HolderRole::Second />
            <JointHolderCard store=store role=HolderRole::Third />

            <Show when=move || show_modal.get()>
                {move || {
                    let center_id = center.get_untracked().trim().parse::<i64>().ok();
                    let customer = customer_id.get_untracked().trim().parse::<i64>().ok();
                    view! {
                        <AssignLockerModal
                            center_id=center_id
                            customer_id=customer
                            on_assigned=on_assigned
                            on_close=on_close
                        />
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn PrimaryRentSummary(store: HolderFormStore) -> impl IntoView {
    let rent = move || store.forms.with(|f| f.primary().rent_details().clone());

    view! {
        <div class="rent-summary">
            <div class="rent-summary__row">
                <span class="rent-summary__label">"Locker No"</span>
                <span>{move || rent().locker_no}</span>
            </div>
            <div class="rent-summary__row">
                <span class="rent-summary__label">"Locker Id"</span>
                <span>{move || rent().locker_id.map(|id| id.to_string()).unwrap_or_default()}</span>
            </div>
            <div class="rent-summary__row">
                <span class="rent-summary__label">"Size"</span>
                <span>{move || rent().locker_size}</span>
            </div>
        </div>
    }
}

#[component]
fn JointHolderCard(store: HolderFormStore, role: HolderRole) -> impl IntoView {
    let present = move || store.forms.with(|f| f.holder(role).is_some());
    let info = move || {
        store
            .forms
            .with(|f| f.holder(role).map(|h| h.locker_info().clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="details-section joint-holder">
            <h4>{role.display_name()}</h4>
            <Show
                when=present
                fallback=move || view! {
                    <button class="btn btn-secondary" on:click=move |_| store.forms.update(|f| f.add_holder(role))>
                        {icon("user-plus")}
                        "Add holder"
                    </button>
                }
            >
                <div class="rent-summary">
                    <div class="rent-summary__row">
                        <span class="rent-summary__label">"Center"</span>
                        <span>{move || info().center}</span>
                    </div>
                    <div class="rent-summary__row">
                        <span class="rent-summary__label">"Assigned locker"</span>
                        <span>{move || info().assigned_locker}</span>
                    </div>
                    <div class="rent-summary__row">
                        <span class="rent-summary__label">"Locker Id"</span>
                        <span>{move || info().locker_id.map(|id| id.to_string()).unwrap_or_default()}</span>
                    </div>
                </div>
                <button class="btn btn-secondary" on:click=move |_| store.forms.update(|f| f.remove_holder(role))>
                    {icon("x")}
                    "Remove"
                </button>
            </Show>
        </div>
    }
}
